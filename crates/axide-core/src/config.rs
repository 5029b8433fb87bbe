//! Example loading configuration.
//!
//! ## Learning: Serde Defaults
//!
//! `#[serde(default)]` fills any field missing from the file with the
//! value from `Default::default()`, so an empty or partial `config.toml`
//! is always valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Example contract settings
    pub examples: ExamplesConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("axide").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Where examples come from and what happens to them at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamplesConfig {
    /// Load examples at all
    pub enabled: bool,

    /// Directory holding `examples.toml` (None = shipped examples)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,

    /// Write the examples into the workspace on start-up
    pub seed_on_startup: bool,

    /// Workspace subdirectory the examples are written to
    pub seed_dir: PathBuf,

    /// Replace files that already exist when seeding
    pub overwrite_existing: bool,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_dir: None,
            seed_on_startup: true,
            seed_dir: PathBuf::from("contracts"),
            overwrite_existing: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
