//! The user's project folder and seeding it with examples.
//!
//! Seeding never clobbers a file the user already has: an example is only
//! written when no file exists at its path, unless overwriting is requested.

use std::path::{Component, Path, PathBuf};

use axide_examples::Bundle;

use crate::{CoreError, CoreResult};

/// Represents a workspace (project folder).
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root directory of the workspace
    root: PathBuf,

    /// Workspace name
    name: String,
}

impl Workspace {
    /// Opens a workspace from a directory.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let root = path.as_ref().canonicalize()?;

        if !root.is_dir() {
            return Err(CoreError::NotADirectory(root.display().to_string()));
        }

        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Workspace")
            .to_string();

        Ok(Self { root, name })
    }

    /// Returns the workspace root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a path relative to the workspace root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Returns the relative path from the workspace root.
    pub fn relative(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        path.as_ref().strip_prefix(&self.root).ok().map(PathBuf::from)
    }

    /// Checks if a path is within the workspace.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().starts_with(&self.root)
    }

    /// Writes every entry of `bundle` under `subdir`, in bundle order.
    ///
    /// Existing files are left alone unless `overwrite` is set. Entries whose
    /// file name is not a bare file name are refused before anything is
    /// written.
    pub fn seed_examples(
        &self,
        bundle: &Bundle,
        subdir: impl AsRef<Path>,
        overwrite: bool,
    ) -> CoreResult<SeedReport> {
        let subdir = subdir.as_ref();
        let target = self.resolve(subdir);
        let climbs = subdir.components().any(|c| c == Component::ParentDir);
        if climbs || !self.contains(&target) {
            return Err(CoreError::OutsideWorkspace(target.display().to_string()));
        }
        if let Some(entry) = bundle.iter().find(|e| !e.has_plain_filename()) {
            return Err(CoreError::OutsideWorkspace(
                target.join(entry.filename()).display().to_string(),
            ));
        }
        std::fs::create_dir_all(&target)?;

        let mut report = SeedReport::default();
        for entry in bundle {
            let path = target.join(entry.filename());
            if path.exists() && !overwrite {
                tracing::warn!("Keeping existing file: {}", path.display());
                report.skipped.push(path);
                continue;
            }
            if let Err(source) = std::fs::write(&path, entry.content()) {
                for written in &report.written {
                    tracing::error!("Seeded before failure: {}", written.display());
                }
                return Err(CoreError::SeedInterrupted {
                    path: path.display().to_string(),
                    written: report.written,
                    source,
                });
            }
            report.written.push(path);
        }

        tracing::info!(
            workspace = %self.name,
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Seeded example contracts"
        );

        Ok(report)
    }
}

/// Outcome of [`Workspace::seed_examples`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Files that were created or replaced
    pub written: Vec<PathBuf>,

    /// Files that already existed and were kept
    pub skipped: Vec<PathBuf>,
}
