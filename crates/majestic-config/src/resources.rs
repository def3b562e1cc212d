//! Resource copy instructions from the `resources` setting.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while interpreting settings values.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A `resources` entry is not a source path, or a source path
    /// plus a `{subdir, name}` descriptor.
    #[error("bad resources entry at index {index}: {message}")]
    BadResourceEntry { index: usize, message: String },
}

/// One resource copy instruction.
///
/// A `resources` entry is either a bare source path (a file,
/// directory, or glob pattern) or a pair of source path and
/// destination descriptor:
///
/// ```json
/// [
///     ["../error.html"],
///     ["~/Pictures/*.jpg", {"subdir": "images"}],
///     ["../error.html", {"name": "404.html"}]
/// ]
/// ```
///
/// `subdir` places the source under a subdirectory of the output
/// root; `name` renames it. Both are independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopySpec {
    pub source: String,
    pub subdir: Option<String>,
    pub name: Option<String>,
}

impl CopySpec {
    /// Parse every entry of a `resources` array.
    ///
    /// All entries are checked; the first malformed one is reported
    /// with its index so the author can find it.
    pub fn parse_list(resources: &Value) -> Result<Vec<CopySpec>, ConfigError> {
        let entries = match resources {
            Value::Array(entries) => entries,
            other => {
                return Err(ConfigError::BadResourceEntry {
                    index: 0,
                    message: format!("expected an array of entries, found {other}"),
                });
            }
        };
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_entry(entry, index))
            .collect()
    }

    fn parse_entry(entry: &Value, index: usize) -> Result<CopySpec, ConfigError> {
        let bad = |message: String| ConfigError::BadResourceEntry { index, message };

        // A bare string is shorthand for a one-element entry.
        if let Value::String(source) = entry {
            return Ok(CopySpec {
                source: source.clone(),
                subdir: None,
                name: None,
            });
        }

        let Value::Array(parts) = entry else {
            return Err(bad(format!("expected a string or an array, found {entry}")));
        };

        let source = match parts.first() {
            Some(Value::String(source)) => source.clone(),
            Some(other) => return Err(bad(format!("source path must be a string, found {other}"))),
            None => return Err(bad("entry is empty".to_string())),
        };

        let mut spec = CopySpec {
            source,
            subdir: None,
            name: None,
        };

        match parts.get(1) {
            None => {}
            Some(Value::Object(descriptor)) => {
                spec.subdir = string_field(descriptor, "subdir", index)?;
                spec.name = string_field(descriptor, "name", index)?;
            }
            Some(other) => {
                return Err(bad(format!(
                    "destination descriptor must be a mapping, found {other}"
                )));
            }
        }
        if parts.len() > 2 {
            return Err(bad(format!("expected at most 2 elements, found {}", parts.len())));
        }

        Ok(spec)
    }

    /// The path this resource copies to, under `output_root`.
    ///
    /// Without a `name`, the source's file name is kept. Glob sources
    /// resolve per matched file, so for them the destination is the
    /// containing directory.
    pub fn destination(&self, output_root: &Path) -> PathBuf {
        let mut dest = output_root.to_path_buf();
        if let Some(subdir) = &self.subdir {
            dest.push(subdir);
        }
        match &self.name {
            Some(name) => dest.push(name),
            None => {
                if let Some(file_name) = Path::new(&self.source).file_name() {
                    dest.push(file_name);
                }
            }
        }
        dest
    }
}

fn string_field(
    descriptor: &serde_json::Map<String, Value>,
    field: &str,
    index: usize,
) -> Result<Option<String>, ConfigError> {
    match descriptor.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::BadResourceEntry {
            index,
            message: format!("'{field}' must be a string, found {other}"),
        }),
    }
}
