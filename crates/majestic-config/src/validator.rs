//! Settings validation engine.
//!
//! A single deterministic, depth-first pass over the schema. All
//! problems are collected before reporting: the walk never stops at
//! the first failure, so the caller sees every missing key in one
//! run, not one per run.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{KeyPath, SchemaError, SchemaErrorKind};
use crate::resolved::ResolvedSettings;
use crate::types::{GroupSchema, Requirement, SchemaNode};

/// Validate a raw configuration against a schema.
///
/// On success every `defaulted` key is filled, every `inherited` key
/// is materialized at its consuming scope, and every `required` key
/// is present and non-empty. On failure the complete problem list is
/// returned (warnings included) and no settings object exists.
///
/// Callers that need warnings on the success path should use
/// [`validate_with_warnings`].
pub fn validate(raw: &Value, schema: &GroupSchema) -> Result<ResolvedSettings, Vec<SchemaError>> {
    let (settings, problems) = validate_with_warnings(raw, schema);
    match settings {
        Some(settings) => Ok(settings),
        None => Err(problems),
    }
}

/// Validate, returning both the outcome and every collected problem.
///
/// The settings are `Some` exactly when no fatal problem was found;
/// non-fatal `UnknownKey` warnings may accompany a successful
/// validation and do not block generation.
pub fn validate_with_warnings(
    raw: &Value,
    schema: &GroupSchema,
) -> (Option<ResolvedSettings>, Vec<SchemaError>) {
    let empty = Map::new();
    let root = match raw.as_object() {
        Some(map) => map,
        None => {
            // The upstream loader should only hand us a mapping.
            warn!("settings root is not a mapping; treating as empty");
            &empty
        }
    };

    let mut ctx = ValidationContext::new();
    let resolved = walk_group(schema, Some(root), &[], &mut ctx);

    let settings = if ctx.has_fatal() {
        None
    } else {
        Some(ResolvedSettings::new(Value::Object(
            resolved.unwrap_or_default(),
        )))
    };
    (settings, ctx.into_problems())
}

/// Validation context: the current dotted path and the problems
/// collected so far.
struct ValidationContext {
    path: KeyPath,
    problems: Vec<SchemaError>,
    // Scope-and-key pairs an inherited lookup read from, keyed by the
    // scope map's address. The maps are borrows of the immutable raw
    // value, so the addresses are stable for the whole walk.
    inherited_sources: HashSet<(usize, String)>,
}

impl ValidationContext {
    fn new() -> Self {
        ValidationContext {
            path: KeyPath::new(),
            problems: Vec::new(),
            inherited_sources: HashSet::new(),
        }
    }

    fn mark_inherited_source(&mut self, scope: &Map<String, Value>, key: &str) {
        self.inherited_sources
            .insert((scope as *const _ as usize, key.to_owned()));
    }

    fn is_inherited_source(&self, scope: &Map<String, Value>, key: &str) -> bool {
        self.inherited_sources
            .contains(&(scope as *const _ as usize, key.to_owned()))
    }

    fn add_problem(&mut self, kind: SchemaErrorKind, key: &str) {
        self.problems.push(SchemaError::new(kind, self.path.child(key)));
    }

    fn with_path<R>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    fn has_fatal(&self) -> bool {
        self.problems.iter().any(SchemaError::is_fatal)
    }

    fn into_problems(self) -> Vec<SchemaError> {
        self.problems
    }
}

/// Walk one schema group against its raw scope.
///
/// `ancestors` is the scope chain, nearest enclosing scope first.
/// Returns the resolved scope, or `None` when nothing materialized
/// (an absent optional group stays absent).
fn walk_group(
    schema: &GroupSchema,
    scope: Option<&Map<String, Value>>,
    ancestors: &[&Map<String, Value>],
    ctx: &mut ValidationContext,
) -> Option<Map<String, Value>> {
    let empty = Map::new();
    let raw = scope.unwrap_or(&empty);
    let mut resolved = Map::new();

    for (key, node) in &schema.entries {
        match node {
            SchemaNode::Setting(requirement) => {
                if let Some(value) = resolve_setting(key, requirement, raw, ancestors, ctx) {
                    resolved.insert(key.clone(), value);
                }
            }
            SchemaNode::Group(child_schema) => {
                let child_scope = match raw.get(key) {
                    Some(Value::Object(map)) => Some(map),
                    Some(other) => {
                        // Wrong shape; the group's own checks then run
                        // against an absent scope.
                        warn!(
                            key = %ctx.path.child(key),
                            "expected a settings group, found {}",
                            type_name(other)
                        );
                        None
                    }
                    None => None,
                };

                // The current scope becomes the nearest ancestor for
                // the child's inheritance search.
                let mut chain: Vec<&Map<String, Value>> = Vec::with_capacity(ancestors.len() + 1);
                chain.push(raw);
                chain.extend_from_slice(ancestors);

                let child =
                    ctx.with_path(key, |ctx| walk_group(child_schema, child_scope, &chain, ctx));

                // Materialize the group if the raw config had it or
                // something inside it resolved (defaults count). An
                // absent optional group stays absent.
                if let Some(map) = child {
                    resolved.insert(key.clone(), Value::Object(map));
                }
            }
        }
    }

    // Undeclared keys: pass through in an open group; elsewhere warn
    // and pass through anyway; reporting is the CLI's job and the
    // value may still be meaningful to a template. A key an inherited
    // lookup consumed from this scope is a feeder, not a typo, and
    // does not warn.
    for (key, value) in raw {
        if schema.entry(key).is_some() {
            continue;
        }
        if !schema.open && !ctx.is_inherited_source(raw, key) {
            ctx.add_problem(SchemaErrorKind::UnknownKey, key);
        }
        resolved.insert(key.clone(), value.clone());
    }

    if resolved.is_empty() && scope.is_none() {
        None
    } else {
        Some(resolved)
    }
}

/// Resolve a single setting at the current scope.
///
/// Resolution order for an absent key: inheritance (nearest enclosing
/// scope first), then the schema default, then a `MissingRequired`
/// problem if the key is required.
fn resolve_setting(
    key: &str,
    requirement: &Requirement,
    raw: &Map<String, Value>,
    ancestors: &[&Map<String, Value>],
    ctx: &mut ValidationContext,
) -> Option<Value> {
    if let Some(value) = raw.get(key).filter(|v| !v.is_null()) {
        if requirement.required && is_empty_value(value) {
            // Required means present *and* non-empty.
            ctx.add_problem(SchemaErrorKind::MissingRequired, key);
            return None;
        }
        return Some(value.clone());
    }

    if requirement.inherited {
        // Nearest enclosing scope wins. An empty ancestor value is no
        // value at all; the search keeps climbing so a required key
        // cannot resolve to "".
        for ancestor in ancestors {
            if let Some(value) = ancestor.get(key).filter(|v| !is_empty_value(v)) {
                ctx.mark_inherited_source(ancestor, key);
                return Some(value.clone());
            }
        }
    }

    if let Some(default) = &requirement.default {
        return Some(default.clone());
    }

    if requirement.required {
        ctx.add_problem(SchemaErrorKind::MissingRequired, key);
    }
    None
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Null => true,
        _ => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
