//! # Axide Core
//!
//! Editor-side handling of the bundled example contracts.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────── Startup ────────────────────────────┐
//! │   Config ──► load bundle (shipped │ directory) ──► validate     │
//! │                                                      │          │
//! │                               Arc<Bundle> ◄──────────┘          │
//! │                                    │                            │
//! │                       Workspace::seed_examples                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A broken example set is a packaging bug, so [`Startup`] refuses to hand
//! it out. Looking up a key that does not exist is an ordinary, recoverable
//! [`axide_examples::BundleError::NotFound`].

pub mod config;
pub mod startup;
pub mod workspace;

pub use config::{Config, ConfigError, ExamplesConfig};
pub use startup::{Loaded, Startup};
pub use workspace::{SeedReport, Workspace};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Examples error: {0}")]
    Examples(#[from] axide_examples::BundleError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Path is outside the workspace: {0}")]
    OutsideWorkspace(String),

    #[error("Seeding stopped at {path}: {source}")]
    SeedInterrupted {
        path: String,
        written: Vec<std::path::PathBuf>,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<axide_examples::ValidationError> for CoreError {
    fn from(err: axide_examples::ValidationError) -> Self {
        CoreError::Examples(err.into())
    }
}
