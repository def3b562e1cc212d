//! Inspect command implementation.
//!
//! Splits a combined content file on the separator token, parses each
//! segment and lists the resulting documents. Useful for checking how
//! the generator will see a file before a build.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use majestic_content::DocumentBatch;

/// The reserved token between documents in a combined file. Opaque on
/// purpose: it must never collide with legitimate content, and there
/// is no escaping.
pub const DEFAULT_SEPARATOR: &str = "{: MAJESTIC-DOC-9f2e1c :}";

pub fn execute(file: &Path, separator: &str, json: bool) -> Result<()> {
    if separator.is_empty() {
        bail!("--separator must not be empty");
    }
    let blob = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read content file {}", file.display()))?;

    let batch = DocumentBatch::parse(&blob, separator);
    info!(documents = batch.len(), "parsed {}", file.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    // Zero documents is not a failure; an all-whitespace file is
    // simply empty.
    for (i, doc) in batch.iter().enumerate() {
        let title = doc.title().unwrap_or("(untitled)");
        let slug = doc.slug().unwrap_or_else(|| "-".to_string());
        let draft = if doc.is_draft() { " [draft]" } else { "" };
        println!(
            "{:>3}  {title}{draft}  (slug: {slug}, {} headers, {} body bytes)",
            i + 1,
            doc.headers.len(),
            doc.body.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_separator_is_an_error_not_a_panic() {
        let err = execute(Path::new("content.txt"), "", false).unwrap_err();
        assert!(err.to_string().contains("--separator"));
    }
}
