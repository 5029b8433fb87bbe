//! A single example file.

use std::borrow::Cow;
use std::path::{Component, Path};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `import "./File.sol";` and `import {A} from './File.sol';`.
static RELATIVE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+(?:[^;"']*\s+from\s+)?["']\./([^"'\s]+)["']"#)
        .expect("relative import pattern is valid")
});

/// True if `name` is exactly one normal path component.
pub(crate) fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// One example file: a stable key, the name it is shown and imported under,
/// and its text.
///
/// Fields are private so that an entry handed out by reference can never be
/// altered by the host editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    key: Cow<'static, str>,
    filename: Cow<'static, str>,
    content: Cow<'static, str>,
}

impl Entry {
    /// Creates an entry. Static strings are borrowed, owned ones moved in.
    pub fn new(
        key: impl Into<Cow<'static, str>>,
        filename: impl Into<Cow<'static, str>>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            key: key.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Returns the lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the file name used for tab titles and import resolution.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the raw file text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if the file name is a single plain path component, so
    /// joining it to a directory always names a file directly inside it.
    pub fn has_plain_filename(&self) -> bool {
        is_bare_file_name(&self.filename)
    }

    /// Returns the file names this entry imports with a `./` relative path,
    /// in order of appearance.
    ///
    /// Only the import line is looked at; the rest of the text is never
    /// parsed.
    pub fn imports(&self) -> Vec<&str> {
        RELATIVE_IMPORT
            .captures_iter(&self.content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let entry = Entry::new("owner", "1_Owner.sol", "contract Owner {}");
        assert_eq!(entry.key(), "owner");
        assert_eq!(entry.filename(), "1_Owner.sol");
        assert_eq!(entry.content(), "contract Owner {}");
    }

    #[test]
    fn test_owned_strings() {
        let name = String::from("Token.sol");
        let entry = Entry::new(String::from("token"), name, String::new());
        assert_eq!(entry.filename(), "Token.sol");
        assert!(entry.content().is_empty());
    }

    #[test]
    fn test_plain_filename() {
        assert!(Entry::new("a", "1_Owner.sol", "").has_plain_filename());
        assert!(!Entry::new("a", "/tmp/out.sol", "").has_plain_filename());
        assert!(!Entry::new("a", "../out.sol", "").has_plain_filename());
        assert!(!Entry::new("a", "sub/out.sol", "").has_plain_filename());
        assert!(!Entry::new("a", "..", "").has_plain_filename());
        assert!(!Entry::new("a", "", "").has_plain_filename());
    }

    #[test]
    fn test_plain_imports() {
        let entry = Entry::new(
            "token",
            "Token.sol",
            "pragma solidity ^0.5.0;\n\nimport \"./A.sol\";\nimport './B.sol';\n\ncontract T {}",
        );
        assert_eq!(entry.imports(), vec!["A.sol", "B.sol"]);
    }

    #[test]
    fn test_named_imports() {
        let entry = Entry::new(
            "token",
            "Token.sol",
            "import {Owner} from \"./1_Owner.sol\";\nimport * as M from './2_SafeMath.sol';",
        );
        assert_eq!(entry.imports(), vec!["1_Owner.sol", "2_SafeMath.sol"]);
    }

    #[test]
    fn test_non_relative_imports_ignored() {
        let entry = Entry::new(
            "token",
            "Token.sol",
            "import \"github.com/oz/Ownable.sol\";\nimport \"../up.sol\";",
        );
        assert!(entry.imports().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let entry = Entry::new("owner", "1_Owner.sol", "x");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"key":"owner","filename":"1_Owner.sol","content":"x"}"#
        );
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
