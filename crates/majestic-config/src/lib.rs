//! Settings schema and validation for majestic.
//!
//! This crate owns the shape of a site's settings: which keys exist,
//! which are required, which fall back to an enclosing scope and
//! which have fixed defaults. The schema is plain data
//! ([`GroupSchema`]), so it can be inspected and tested independently
//! of the walk that validates a configuration against it.
//!
//! # Key concepts
//!
//! - [`Requirement`]: per-key requiredness (required / optional /
//!   inherited / defaulted, in combination)
//! - [`settings_schema`]: the static schema for a majestic site
//! - [`validate`]: depth-first walk producing either a
//!   [`ResolvedSettings`] or the complete list of [`SchemaError`]s,
//!   never the first error alone
//! - [`merge_layers`]: combine settings files (defaults, then the
//!   site's own) before validation
//!
//! # Example
//!
//! ```rust
//! use majestic_config::{settings_schema, validate};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "site": {
//!         "url": "https://example.com",
//!         "title": "Example",
//!         "description": "An example blog",
//!     },
//!     "templates": {
//!         "post": "post.html",
//!         "page": "page.html",
//!         "index": "index.html",
//!         "archives": "archives.html",
//!     },
//! });
//!
//! let settings = validate(&raw, settings_schema()).unwrap();
//! assert_eq!(
//!     settings.get(&["feeds", "number of posts"]),
//!     Some(&json!(10)),
//! );
//! ```

mod defaults;
mod error;
mod merge;
mod resolved;
mod resources;
mod schema;
mod types;
mod validator;

pub use defaults::default_settings;
pub use error::{KeyPath, SchemaError, SchemaErrorKind};
pub use merge::merge_layers;
pub use resolved::ResolvedSettings;
pub use resources::{ConfigError, CopySpec};
pub use schema::settings_schema;
pub use types::{GroupSchema, Requirement, SchemaNode};
pub use validator::{validate, validate_with_warnings};
