//! Splitting combined content files into ordered documents.

use serde::Serialize;
use tracing::debug;

use crate::document::Document;

/// Split `blob` on exact, non-overlapping occurrences of a literal
/// separator token.
///
/// Segments are returned untrimmed and in source order, so
/// `segments.join(separator) == blob` holds for every input. A blob
/// with no separator is one segment. A trailing separator yields a
/// trailing empty segment; [`DocumentBatch::parse`] filters those.
///
/// The separator is a hard reserved token. There is no way to escape
/// it inside document content; pick a marker that cannot occur in
/// legitimate text. This is a known limitation, not a bug.
///
/// # Panics
///
/// Panics if `separator` is empty, which would make every position a
/// match.
pub fn split<'a>(blob: &'a str, separator: &str) -> Vec<&'a str> {
    assert!(!separator.is_empty(), "separator must be non-empty");
    blob.split(separator).collect()
}

/// An ordered sequence of [`Document`]s produced from one combined
/// file.
///
/// Batches are built once per site build from static input and are
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentBatch {
    documents: Vec<Document>,
}

impl DocumentBatch {
    /// Split `blob` on `separator` and parse each segment.
    ///
    /// Blank segments are skipped, so a trailing separator or a
    /// doubled separator never fails. Document order matches order of
    /// appearance in the blob.
    pub fn parse(blob: &str, separator: &str) -> DocumentBatch {
        let segments = split(blob, separator);
        let segment_count = segments.len();
        let documents: Vec<Document> = segments.into_iter().filter_map(Document::parse).collect();

        if documents.len() != segment_count {
            debug!(
                skipped = segment_count - documents.len(),
                "skipped blank segments in combined file"
            );
        }

        DocumentBatch { documents }
    }

    /// The parsed documents, in source order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl IntoIterator for DocumentBatch {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentBatch {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
