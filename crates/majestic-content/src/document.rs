//! A single content unit: front-matter headers plus a markdown body.

use indexmap::IndexMap;
use serde::Serialize;

use crate::slug::{normalise_slug, validate_slug};

/// One logical content unit: a header block and a body.
///
/// Headers are an open namespace. Posts carry `Title`, `Date` and
/// `Slug`; imported fixtures carry whatever their source did
/// ("Observed by", "Held on", ...). Nothing here interprets them;
/// downstream templates look keys up by name.
///
/// Header insertion order is preserved for round-trip emission, but
/// lookup via [`Document::header`] is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Header entries in source order. Keys keep their original case.
    pub headers: IndexMap<String, String>,
    /// Everything after the header block, verbatim. Markdown, but this
    /// crate does not parse it.
    pub body: String,
}

impl Document {
    /// Parse one raw document as produced by [`crate::split`].
    ///
    /// Consecutive leading lines matching `Key: Value` become headers;
    /// the header block ends at the first blank line or the first line
    /// that does not match. The terminating blank line is dropped, all
    /// later blank lines are kept in the body.
    ///
    /// Returns `None` for empty or all-whitespace input. That is the
    /// "skip" signal: combined files may legitimately contain blank
    /// segments (a trailing separator, say) and those are not an
    /// author error.
    pub fn parse(raw: &str) -> Option<Document> {
        if raw.trim().is_empty() {
            return None;
        }

        let mut headers = IndexMap::new();
        let mut rest = raw;

        loop {
            let (line, after) = match rest.split_once('\n') {
                Some((line, after)) => (line, after),
                None => (rest, ""),
            };

            if line.trim().is_empty() {
                if headers.is_empty() {
                    // Leading blank lines (a separator on its own
                    // line leaves one) are not the header/body
                    // boundary; skip them.
                    rest = after;
                    continue;
                }
                // Blank line terminates the header block and is not
                // part of the body.
                rest = after;
                break;
            }

            match parse_header_line(line) {
                Some((key, value)) => {
                    headers.insert(key.to_string(), value.to_string());
                    rest = after;
                }
                // Malformed header line: header/body boundary, the
                // line itself belongs to the body.
                None => break,
            }
        }

        Some(Document {
            headers,
            body: rest.to_string(),
        })
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The document title, if a `Title` header is present.
    pub fn title(&self) -> Option<&str> {
        self.header("title")
    }

    /// The document slug.
    ///
    /// An explicit `Slug` header wins; an invalid one is normalised
    /// rather than rejected. With no `Slug` header the slug is derived
    /// from the title. Returns `None` only when the document has
    /// neither header.
    pub fn slug(&self) -> Option<String> {
        if let Some(slug) = self.header("slug") {
            if validate_slug(slug) {
                return Some(slug.to_string());
            }
            return Some(normalise_slug(slug));
        }
        self.title().map(normalise_slug)
    }

    /// Whether the document is marked as a draft via a `Draft` header.
    ///
    /// Drafts are parsed like any other document; excluding them from
    /// a build is the caller's decision.
    pub fn is_draft(&self) -> bool {
        self.header("draft").is_some()
    }
}

/// Split a line into a header key and value.
///
/// A header line is `Key: Value` where the key is word characters and
/// spaces. Keys are trimmed but keep their case; values are trimmed at
/// both ends. Returns `None` when the line is not a header.
fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    if !key
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == ' ')
    {
        return None;
    }
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers_and_body() {
        let raw = "Title: Battle of Hastings\nDate: 1066-10-14 09:00\n\nThe battle was fought.\n";
        let doc = Document::parse(raw).unwrap();

        assert_eq!(doc.headers.len(), 2);
        assert_eq!(doc.header("Title"), Some("Battle of Hastings"));
        assert_eq!(doc.body, "The battle was fought.\n");
    }

    #[test]
    fn test_parse_preserves_header_order() {
        let raw = "Years: 1642-1651\nLocation: England\nResult: Decisive\n\nBody";
        let doc = Document::parse(raw).unwrap();

        let keys: Vec<&str> = doc.headers.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Years", "Location", "Result"]);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let doc = Document::parse("Observed by: Many countries\n\nBody").unwrap();
        assert_eq!(doc.header("observed by"), Some("Many countries"));
        assert_eq!(doc.header("OBSERVED BY"), Some("Many countries"));
        assert_eq!(doc.header("observed"), None);
    }

    #[test]
    fn test_parse_trims_values_not_bodies() {
        let doc = Document::parse("Title:   spaced out   \n\n  indented body\n").unwrap();
        assert_eq!(doc.header("title"), Some("spaced out"));
        assert_eq!(doc.body, "  indented body\n");
    }

    #[test]
    fn test_body_keeps_internal_blank_lines() {
        let raw = "Title: T\n\npara one\n\npara two\n";
        let doc = Document::parse(raw).unwrap();
        assert_eq!(doc.body, "para one\n\npara two\n");
    }

    #[test]
    fn test_malformed_line_starts_body() {
        // "Some text" has no colon, so the header block ends there and
        // the line itself is the first body line.
        let raw = "Title: T\nSome text without a colon\nMore: not a header anymore\n";
        let doc = Document::parse(raw).unwrap();

        assert_eq!(doc.headers.len(), 1);
        assert!(doc.body.starts_with("Some text without a colon\n"));
        assert!(doc.body.contains("More: not a header anymore"));
    }

    #[test]
    fn test_url_in_value_survives_first_colon_split() {
        let doc = Document::parse("Link: https://example.com/a\n\nBody").unwrap();
        assert_eq!(doc.header("link"), Some("https://example.com/a"));
    }

    #[test]
    fn test_non_word_key_is_body() {
        let doc = Document::parse("fn main(): stuff\n\nBody").unwrap();
        assert!(doc.headers.is_empty());
        assert!(doc.body.starts_with("fn main(): stuff"));
    }

    #[test]
    fn test_leading_blank_lines_do_not_end_headers() {
        // A separator on its own line leaves segments starting with a
        // newline; headers still parse.
        let doc = Document::parse("\nTitle: T\n\nBody here").unwrap();
        assert_eq!(doc.header("title"), Some("T"));
        assert_eq!(doc.body, "Body here");
    }

    #[test]
    fn test_whitespace_only_is_skipped() {
        assert_eq!(Document::parse(""), None);
        assert_eq!(Document::parse("   \n\n  \t\n"), None);
    }

    #[test]
    fn test_headers_only_no_body() {
        let doc = Document::parse("Title: Alone\n").unwrap();
        assert_eq!(doc.header("title"), Some("Alone"));
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_slug_from_header() {
        let doc = Document::parse("Title: Hello World\nSlug: custom-slug\n\nB").unwrap();
        assert_eq!(doc.slug().unwrap(), "custom-slug");
    }

    #[test]
    fn test_slug_from_title_when_missing() {
        let doc = Document::parse("Title: Hello World\n\nB").unwrap();
        assert_eq!(doc.slug().unwrap(), "hello-world");
    }

    #[test]
    fn test_invalid_slug_header_is_normalised() {
        let doc = Document::parse("Title: T\nSlug: Bad Slug!\n\nB").unwrap();
        assert_eq!(doc.slug().unwrap(), "bad-slug");
    }

    #[test]
    fn test_draft_header() {
        let doc = Document::parse("Title: T\nDraft: yes\n\nB").unwrap();
        assert!(doc.is_draft());

        let doc = Document::parse("Title: T\n\nB").unwrap();
        assert!(!doc.is_draft());
    }
}
