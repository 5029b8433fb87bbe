//! Loading an example set from a directory.
//!
//! Deployments that ship their examples as files put an `examples.toml`
//! manifest next to them:
//!
//! ```toml
//! [[example]]
//! key = "owner"
//! filename = "1_Owner.sol"
//!
//! [[example]]
//! key = "token"
//! filename = "Token.sol"
//! path = "src/token.sol"   # optional, defaults to `filename`
//! ```
//!
//! ## Learning: `Path::components`
//!
//! Checking for `..` with string matching misses platform quirks.
//! Walking `components()` sees exactly what the OS would resolve.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entry::is_bare_file_name;
use crate::{Bundle, BundleError, BundleResult, Entry};

/// Name of the manifest file inside an examples directory.
pub const MANIFEST_FILE: &str = "examples.toml";

/// Parsed `examples.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Entries in the order they will appear in the bundle
    #[serde(default, rename = "example")]
    pub examples: Vec<ManifestEntry>,
}

/// One `[[example]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Lookup key
    pub key: String,

    /// Display / import name
    pub filename: String,

    /// Source file relative to the manifest (defaults to `filename`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl ManifestEntry {
    /// Returns the source path relative to the manifest directory.
    pub fn source(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(&self.filename))
    }
}

impl Manifest {
    /// Parses manifest text.
    pub fn parse(content: &str) -> BundleResult<Self> {
        toml::from_str(content).map_err(|e| BundleError::InvalidManifest(e.to_string()))
    }

    /// Reads `examples.toml` from `dir`.
    pub fn read(dir: impl AsRef<Path>) -> BundleResult<Self> {
        let content = std::fs::read_to_string(dir.as_ref().join(MANIFEST_FILE))?;
        Self::parse(&content)
    }

    /// Describes an existing bundle, one file per entry.
    pub fn from_bundle(bundle: &Bundle) -> Self {
        Self {
            examples: bundle
                .iter()
                .map(|entry| ManifestEntry {
                    key: entry.key().to_string(),
                    filename: entry.filename().to_string(),
                    path: None,
                })
                .collect(),
        }
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> BundleResult<String> {
        toml::to_string_pretty(self).map_err(|e| BundleError::InvalidManifest(e.to_string()))
    }
}

/// Rejects source paths that would leave the examples directory and file
/// names that would leave whatever directory they are later seeded into.
fn ensure_contained(entry: &ManifestEntry) -> BundleResult<()> {
    if !is_bare_file_name(&entry.filename) {
        return Err(BundleError::InvalidManifest(format!(
            "filename for `{}` must be a bare file name: {}",
            entry.key, entry.filename
        )));
    }

    let escapes = entry.source().components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(BundleError::InvalidManifest(format!(
            "path for `{}` leaves the examples directory: {}",
            entry.key,
            entry.source().display()
        )));
    }
    Ok(())
}

impl Bundle {
    /// Loads the entries listed in `dir/examples.toml`.
    ///
    /// The result is not validated; callers decide when a broken set is
    /// fatal.
    pub fn load_dir(dir: impl AsRef<Path>) -> BundleResult<Self> {
        let dir = dir.as_ref();
        let manifest = Manifest::read(dir)?;

        let mut entries = Vec::with_capacity(manifest.examples.len());
        for item in &manifest.examples {
            ensure_contained(item)?;
            let content = std::fs::read_to_string(dir.join(item.source()))?;
            entries.push(Entry::new(item.key.clone(), item.filename.clone(), content));
        }

        tracing::debug!(
            dir = %dir.display(),
            entries = entries.len(),
            "Loaded examples from directory"
        );

        Ok(Self::from_entries(entries))
    }
}
