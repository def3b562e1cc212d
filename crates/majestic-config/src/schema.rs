//! The static settings schema for a majestic site.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::types::{GroupSchema, Requirement};

/// The settings schema: one entry per recognized key, grouped the way
/// the settings file is.
///
/// A compile-time constant of the system. Built once, then shared.
pub fn settings_schema() -> &'static GroupSchema {
    static SCHEMA: Lazy<GroupSchema> = Lazy::new(build_schema);
    &SCHEMA
}

fn build_schema() -> GroupSchema {
    GroupSchema::new()
        .group(
            "site",
            GroupSchema::new()
                .setting("url", Requirement::required())
                .setting("title", Requirement::required())
                .setting("description", Requirement::required()),
        )
        .group(
            "paths",
            GroupSchema::new()
                .setting("content root", Requirement::inherited())
                .setting("output root", Requirement::inherited())
                .setting("templates root", Requirement::inherited())
                .setting("extensions root", Requirement::inherited())
                .setting("posts subdir", Requirement::inherited())
                .setting("pages subdir", Requirement::inherited())
                .setting("post path template", Requirement::inherited())
                .setting("page path template", Requirement::inherited())
                .setting("index pages path template", Requirement::inherited())
                .setting("archives path template", Requirement::inherited())
                .setting("rss path template", Requirement::inherited())
                .setting("sitemap path template", Requirement::inherited()),
        )
        .group(
            "templates",
            GroupSchema::new()
                .setting("post", Requirement::required_inherited())
                .setting("page", Requirement::required_inherited())
                .setting("index", Requirement::required_inherited())
                .setting("archives", Requirement::required_inherited())
                // Built-in fallback templates exist for these, so
                // absence only disables customisation.
                .setting("rss", Requirement::optional())
                .setting("sitemap", Requirement::optional()),
        )
        .group(
            "dates",
            GroupSchema::new()
                .setting("format", Requirement::inherited())
                .setting("timezone", Requirement::inherited_or(json!("UTC"))),
        )
        .group(
            "index",
            GroupSchema::new()
                .setting("paginate", Requirement::inherited())
                .setting("posts per page", Requirement::inherited()),
        )
        .group(
            "feeds",
            GroupSchema::new()
                .setting("number of posts", Requirement::defaulted(json!(10)))
                .group(
                    "json",
                    GroupSchema::new()
                        .group(
                            "author",
                            GroupSchema::new()
                                .setting("name", Requirement::optional())
                                .setting("url", Requirement::optional())
                                .setting("avatar", Requirement::optional()),
                        )
                        .setting("icon", Requirement::optional())
                        .setting("favicon", Requirement::optional()),
                ),
        )
        .group(
            "markdown",
            // Whitespace-separated list of extension names.
            GroupSchema::new().setting("extensions", Requirement::inherited()),
        )
        .setting("resources", Requirement::optional())
        .group(
            "preview",
            // Empty string means "use the system default browser".
            GroupSchema::new().setting("browser", Requirement::optional()),
        )
        .group("user", GroupSchema::open())
}
