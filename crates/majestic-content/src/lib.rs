//! Content file splitting and front-matter parsing for majestic.
//!
//! This crate handles the input side of a site build: taking raw text
//! (a single post, or several posts concatenated into one combined
//! file) and turning it into structured [`Document`] values that the
//! renderer consumes.
//!
//! # Key concepts
//!
//! - [`split`]: cut a blob into segments on a literal separator token,
//!   losslessly (`segments.join(sep) == blob`)
//! - [`Document`]: an ordered `Key: Value` header block plus a
//!   markdown body, parsed leniently: a malformed header line is the
//!   header/body boundary, never an error
//! - [`DocumentBatch`]: the ordered sequence of documents produced
//!   from one combined file
//!
//! # Example
//!
//! ```rust
//! use majestic_content::DocumentBatch;
//!
//! let blob = "Title: Hello\nSlug: hello\n\nFirst body.\n%%%\nTitle: Again\n\nSecond body.";
//! let batch = DocumentBatch::parse(blob, "%%%");
//!
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch.documents()[0].header("title"), Some("Hello"));
//! ```

mod batch;
mod document;
mod slug;

pub use batch::{DocumentBatch, split};
pub use document::Document;
pub use slug::{normalise_slug, validate_slug};
