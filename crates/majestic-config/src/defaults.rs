//! Built-in default settings.

use serde_json::{Value, json};

/// The built-in defaults, the lowest-priority settings layer.
///
/// A site's own `settings.json` is merged over this, so a minimal
/// site only has to provide the `site` group.
pub fn default_settings() -> Value {
    json!({
        "paths": {
            "content root": "content",
            "output root": "output",
            "templates root": "templates",
            "extensions root": "extensions",
            "posts subdir": "posts",
            "pages subdir": "pages",
            "post path template": "{date}/{slug}.html",
            "page path template": "{slug}.html",
            "index pages path template": "page-{page_number}.html",
            "archives path template": "archives.html",
            "rss path template": "rss.xml",
            "sitemap path template": "sitemap.xml",
        },
        "templates": {
            "post": "post.html",
            "page": "page.html",
            "index": "index.html",
            "archives": "archives.html",
        },
        "dates": {
            "format": "%Y-%m-%d %H:%M",
        },
        "index": {
            "paginate": true,
            "posts per page": 10,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{settings_schema, validate, merge_layers};
    use serde_json::json;

    /// The defaults plus a `site` group must validate cleanly.
    #[test]
    fn test_defaults_satisfy_schema() {
        let local = json!({
            "site": {
                "url": "https://example.com",
                "title": "Example",
                "description": "A test",
            },
        });
        let merged = merge_layers(vec![default_settings(), local]);
        let settings = validate(&merged, settings_schema()).unwrap();

        assert_eq!(settings.get_str(&["templates", "post"]), Some("post.html"));
        assert_eq!(settings.get_str(&["paths", "output root"]), Some("output"));
        assert_eq!(settings.get_str(&["dates", "timezone"]), Some("UTC"));
    }

    /// The defaults alone are missing the site group, nothing else.
    #[test]
    fn test_defaults_alone_miss_only_site() {
        let problems = validate(&default_settings(), settings_schema()).unwrap_err();
        let missing: Vec<String> = problems
            .iter()
            .filter(|p| p.is_fatal())
            .map(|p| p.path.to_string())
            .collect();
        assert_eq!(missing, ["site.url", "site.title", "site.description"]);
    }
}
