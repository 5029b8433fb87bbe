//! # Axide Examples
//!
//! The example contracts a user sees the first time the editor opens.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────── Bundle ───────────────────────────────┐
//! │  owner          safeMath          axisInterface         testToken     │
//! │  1_Owner.sol    2_SafeMath.sol    3_AxisInterface.sol   4_test_Token  │
//! │       ▲               ▲                  ▲                   │        │
//! │       └───────────────┴──────────────────┴── import "./…" ───┘        │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Bundle`] is an ordered, immutable table of [`Entry`] values keyed by a
//! stable logical key. The editor asks for entries by key to fill its tabs.
//! The contract text is opaque: the only thing ever inspected is the
//! relative `import "./<file>";` line, so that [`Bundle::validate`] can check
//! every import resolves to another entry of the same bundle.
//!
//! ## Learning: Borrowed Lookups, Owned Snapshots
//!
//! - [`Bundle::get`] hands out `&Entry`; the borrow checker guarantees the
//!   caller cannot mutate what the bundle owns.
//! - [`Bundle::list`] returns an owned `Vec<Entry>` the caller is free to
//!   reorder or truncate without touching the bundle.

mod builtin;
mod bundle;
mod entry;
pub mod manifest;
mod validate;

pub use builtin::{
    AXIS_INTERFACE_SOURCE, OWNER_SOURCE, SAFE_MATH_SOURCE, TEST_TOKEN_SOURCE, keys,
};
pub use bundle::{Bundle, BundleBuilder};
pub use entry::Entry;
pub use manifest::{MANIFEST_FILE, Manifest, ManifestEntry};
pub use validate::{ValidationError, Violation};

/// Result type for bundle operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Errors that can occur while loading or querying a bundle
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Example not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
