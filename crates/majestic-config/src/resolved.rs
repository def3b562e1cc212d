//! Validated, normalized settings.

use serde::Serialize;
use serde_json::Value;

/// The result of validating a raw configuration: a nested mapping
/// with defaults filled, inherited keys materialized at the scope
/// that consumes them, and every required key present and non-empty.
///
/// Constructed once at startup and read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSettings {
    root: Value,
}

impl ResolvedSettings {
    pub(crate) fn new(root: Value) -> Self {
        ResolvedSettings { root }
    }

    /// The whole settings tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look a value up by path, e.g. `get(&["site", "url"])`.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path {
            current = current.as_object()?.get(*segment)?;
        }
        Some(current)
    }

    /// Look a string value up by path.
    pub fn get_str(&self, path: &[&str]) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// The markdown extensions, split on whitespace.
    ///
    /// Empty when `markdown.extensions` is unset.
    pub fn markdown_extensions(&self) -> Vec<&str> {
        self.get_str(&["markdown", "extensions"])
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// The preview browser, if one is configured.
    ///
    /// An empty value means "use the system default" and is reported
    /// as `None`, same as an absent one.
    pub fn preview_browser(&self) -> Option<&str> {
        self.get_str(&["preview", "browser"]).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: Value) -> ResolvedSettings {
        ResolvedSettings::new(value)
    }

    #[test]
    fn test_get_walks_nested_scopes() {
        let s = settings(json!({"site": {"url": "https://example.com"}}));
        assert_eq!(s.get(&["site", "url"]), Some(&json!("https://example.com")));
        assert_eq!(s.get_str(&["site", "url"]), Some("https://example.com"));
        assert_eq!(s.get(&["site", "missing"]), None);
        assert_eq!(s.get(&["site", "url", "too-deep"]), None);
    }

    #[test]
    fn test_markdown_extensions_split() {
        let s = settings(json!({"markdown": {"extensions": "smarty codehilite  toc"}}));
        assert_eq!(s.markdown_extensions(), ["smarty", "codehilite", "toc"]);

        let s = settings(json!({}));
        assert!(s.markdown_extensions().is_empty());
    }

    #[test]
    fn test_preview_browser_empty_means_default() {
        let s = settings(json!({"preview": {"browser": ""}}));
        assert_eq!(s.preview_browser(), None);

        let s = settings(json!({"preview": {"browser": "firefox"}}));
        assert_eq!(s.preview_browser(), Some("firefox"));
    }
}
