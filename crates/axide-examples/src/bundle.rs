//! The example bundle: an ordered, read-only lookup table.
//!
//! ## Learning: Immutability Without Locks
//!
//! `Bundle` has no `&mut self` methods. Once built, it can be wrapped in an
//! `Arc` and read from any number of threads at the same time; the compiler
//! derives `Send + Sync` because every field is.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::validate::{self, ValidationError};
use crate::{BundleError, BundleResult, Entry};

/// An ordered collection of example entries, addressable by key.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    /// Entries in their defined order
    entries: Vec<Entry>,

    /// Key to position in `entries` (first occurrence wins)
    index: HashMap<String, usize>,
}

impl Bundle {
    /// Creates a bundle from entries without checking them.
    ///
    /// Use [`Bundle::validate`] (or [`Bundle::validated`]) before handing the
    /// bundle to the editor. If a key is repeated, lookups resolve to its
    /// first occurrence.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            index.entry(entry.key().to_string()).or_insert(pos);
        }

        tracing::debug!(entries = entries.len(), "Built example bundle");

        Self { entries, index }
    }

    /// Creates a bundle and rejects it if any invariant is broken.
    pub fn validated(entries: Vec<Entry>) -> Result<Self, ValidationError> {
        let bundle = Self::from_entries(entries);
        bundle.validate()?;
        Ok(bundle)
    }

    /// Returns a builder for assembling a bundle entry by entry.
    pub fn builder() -> BundleBuilder {
        BundleBuilder::default()
    }

    /// Returns the entry registered under `key`.
    pub fn get(&self, key: &str) -> BundleResult<&Entry> {
        self.index
            .get(key)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| BundleError::NotFound(key.to_string()))
    }

    /// Returns the entry whose file name is `filename`.
    pub fn by_filename(&self, filename: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.filename() == filename)
    }

    /// Returns true if an entry is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns a snapshot of all entries in their defined order.
    ///
    /// The returned vector is independent of the bundle.
    pub fn list(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    /// Iterates over entries in their defined order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Iterates over keys in their defined order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }

    /// Iterates over file names in their defined order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::filename)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks key and file name uniqueness and that every relative import
    /// resolves to a file in this bundle.
    ///
    /// Every problem found is reported, not just the first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations = validate::check(&self.entries);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Entry> for Bundle {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

/// Fluent construction of a [`Bundle`].
#[derive(Debug, Default)]
pub struct BundleBuilder {
    entries: Vec<Entry>,
}

impl BundleBuilder {
    /// Appends an entry.
    pub fn entry(
        mut self,
        key: impl Into<Cow<'static, str>>,
        filename: impl Into<Cow<'static, str>>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.entries.push(Entry::new(key, filename, content));
        self
    }

    /// Appends an already constructed entry.
    pub fn push(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Builds the bundle without validation.
    pub fn build(self) -> Bundle {
        Bundle::from_entries(self.entries)
    }

    /// Builds the bundle, failing if it breaks any invariant.
    pub fn build_validated(self) -> Result<Bundle, ValidationError> {
        Bundle::validated(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bundle {
        Bundle::builder()
            .entry("base", "1_Base.sol", "contract Base {}")
            .entry(
                "child",
                "2_Child.sol",
                "import \"./1_Base.sol\";\ncontract Child is Base {}",
            )
            .build()
    }

    #[test]
    fn test_get() {
        let bundle = sample();
        let child = bundle.get("child").unwrap();
        assert_eq!(child.filename(), "2_Child.sol");
        assert!(bundle.contains("base"));
        assert!(!bundle.contains("missing"));
    }

    #[test]
    fn test_get_missing_leaves_bundle_untouched() {
        let bundle = sample();
        let before = bundle.list();
        assert!(matches!(bundle.get("nope"), Err(BundleError::NotFound(_))));
        assert_eq!(bundle.list(), before);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let bundle = sample();
        let mut first = bundle.list();
        first.reverse();
        first.pop();
        let second = bundle.list();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].key(), "base");
        assert_eq!(second[1].key(), "child");
    }

    #[test]
    fn test_order_and_iterators() {
        let bundle = sample();
        assert_eq!(bundle.keys().collect::<Vec<_>>(), ["base", "child"]);
        assert_eq!(
            bundle.filenames().collect::<Vec<_>>(),
            ["1_Base.sol", "2_Child.sol"]
        );
        assert_eq!((&bundle).into_iter().count(), 2);
        assert_eq!(bundle.by_filename("1_Base.sol").unwrap().key(), "base");
        assert!(bundle.by_filename("3_Other.sol").is_none());
    }

    #[test]
    fn test_duplicate_key_resolves_to_first() {
        let bundle = Bundle::builder()
            .entry("dup", "a.sol", "first")
            .entry("dup", "b.sol", "second")
            .build();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("dup").unwrap().content(), "first");
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_build_validated() {
        let dangling = Bundle::builder()
            .entry("a", "a.sol", "import \"./b.sol\";")
            .build_validated();
        assert!(dangling.is_err());
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty() {
        let bundle = Bundle::default();
        assert!(bundle.is_empty());
        assert!(bundle.list().is_empty());
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn test_collect() {
        let bundle: Bundle = vec![Entry::new("x", "x.sol", "")].into_iter().collect();
        assert_eq!(bundle.len(), 1);
    }
}
