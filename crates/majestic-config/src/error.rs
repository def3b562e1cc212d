//! Error types for settings validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured validation problem kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SchemaErrorKind {
    /// A required (or unresolvable required-inherited) key is absent.
    /// Fatal: generation must not proceed.
    MissingRequired,

    /// A key not declared in the schema, outside the open `user`
    /// scope. A warning: reported, never blocking.
    UnknownKey,
}

impl SchemaErrorKind {
    /// Format a human-readable message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            SchemaErrorKind::MissingRequired => "missing required setting",
            SchemaErrorKind::UnknownKey => "unknown setting",
        }
    }
}

/// A validation problem with the dotted path it occurred at.
///
/// Problems are collected exhaustively: the validator never stops at
/// the first failure, so a caller sees every problem in one pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub path: KeyPath,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, path: KeyPath) -> Self {
        SchemaError { kind, path }
    }

    /// Whether this problem blocks generation.
    ///
    /// `MissingRequired` does; `UnknownKey` is report-only.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, SchemaErrorKind::MissingRequired)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind.message(), self.path)
    }
}

/// A dotted key path into the settings tree (e.g. `site.url`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a new empty path (the root).
    pub fn new() -> Self {
        KeyPath {
            segments: Vec::new(),
        }
    }

    /// Push a key segment onto the path.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Pop the last segment from the path.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// A copy of this path with one more segment.
    pub fn child(&self, segment: impl Into<String>) -> KeyPath {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// Get the segments as a slice.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        KeyPath {
            segments: segments.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_path_display() {
        let mut path = KeyPath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push("site");
        assert_eq!(path.to_string(), "site");

        path.push("url");
        assert_eq!(path.to_string(), "site.url");
    }

    #[test]
    fn test_key_path_child_does_not_mutate() {
        let path = KeyPath::from(["feeds"].as_slice());
        let child = path.child("json");
        assert_eq!(path.to_string(), "feeds");
        assert_eq!(child.to_string(), "feeds.json");
    }

    #[test]
    fn test_schema_error_display_and_severity() {
        let error = SchemaError::new(
            SchemaErrorKind::MissingRequired,
            KeyPath::from(["site", "url"].as_slice()),
        );
        assert_eq!(error.to_string(), "missing required setting at site.url");
        assert!(error.is_fatal());

        let warning = SchemaError::new(SchemaErrorKind::UnknownKey, KeyPath::from(["foo"].as_slice()));
        assert_eq!(warning.to_string(), "unknown setting at foo");
        assert!(!warning.is_fatal());
    }
}
