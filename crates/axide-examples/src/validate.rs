//! Bundle self-consistency checks.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::Entry;

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("duplicate key `{key}`")]
    DuplicateKey { key: String },

    #[error("duplicate filename `{filename}` (entry `{key}`)")]
    DuplicateFilename { key: String, filename: String },

    #[error("`{filename}` (entry `{key}`) imports missing file `{missing}`")]
    MissingImport {
        key: String,
        filename: String,
        missing: String,
    },
}

/// Every invariant the bundle breaks, collected in one pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("example bundle is invalid {}", render(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns all violations, duplicates first, then missing imports in
    /// entry order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns `(key, missing filename)` for each unresolved import.
    pub fn missing_imports(&self) -> impl Iterator<Item = (&str, &str)> {
        self.violations.iter().filter_map(|v| match v {
            Violation::MissingImport { key, missing, .. } => {
                Some((key.as_str(), missing.as_str()))
            }
            _ => None,
        })
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false for an error produced by validation.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

fn render(violations: &[Violation]) -> String {
    let mut out = format!("({} problem(s)):", violations.len());
    for violation in violations {
        let _ = write!(out, "\n  - {violation}");
    }
    out
}

/// Collects every violation in `entries`.
pub(crate) fn check(entries: &[Entry]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut keys = HashSet::with_capacity(entries.len());
    let mut filenames = HashSet::with_capacity(entries.len());

    for entry in entries {
        if !keys.insert(entry.key()) {
            violations.push(Violation::DuplicateKey {
                key: entry.key().to_string(),
            });
        }
        if !filenames.insert(entry.filename()) {
            violations.push(Violation::DuplicateFilename {
                key: entry.key().to_string(),
                filename: entry.filename().to_string(),
            });
        }
    }

    for entry in entries {
        for import in entry.imports() {
            if !filenames.contains(import) {
                violations.push(Violation::MissingImport {
                    key: entry.key().to_string(),
                    filename: entry.filename().to_string(),
                    missing: import.to_string(),
                });
            }
        }
    }

    violations
}
