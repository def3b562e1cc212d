//! Schema type definitions.
//!
//! A settings schema is a static, nested description of configuration
//! shape: for each key, its requiredness, and for nested groups, the
//! child schema. Representing the schema as data (rather than
//! hard-coded branching) keeps it inspectable and lets the walk logic
//! in [`crate::validate`] stay generic.

use indexmap::IndexMap;
use serde_json::Value;

/// Requiredness of a single setting.
///
/// The classes combine: a key can be both required and inherited
/// (must resolve somewhere, but an enclosing scope may provide it),
/// or inherited with a default (fall back outward, then to the
/// default).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirement {
    /// Must resolve to a non-empty value or validation fails.
    pub required: bool,
    /// Absent at this scope: search enclosing scopes, nearest first.
    pub inherited: bool,
    /// Absent everywhere: fill with this value.
    pub default: Option<Value>,
}

impl Requirement {
    /// Must be present; generation fails otherwise.
    pub fn required() -> Self {
        Requirement {
            required: true,
            ..Default::default()
        }
    }

    /// May be absent; the feature it controls is disabled if so.
    pub fn optional() -> Self {
        Requirement::default()
    }

    /// Falls back to a higher-scope value if absent here.
    pub fn inherited() -> Self {
        Requirement {
            inherited: true,
            ..Default::default()
        }
    }

    /// Inherited, and must resolve somewhere up the scope chain.
    pub fn required_inherited() -> Self {
        Requirement {
            required: true,
            inherited: true,
            default: None,
        }
    }

    /// Absent means this fixed value.
    pub fn defaulted(value: Value) -> Self {
        Requirement {
            default: Some(value),
            ..Default::default()
        }
    }

    /// Inherited, with a fixed fallback if no ancestor provides it.
    pub fn inherited_or(value: Value) -> Self {
        Requirement {
            inherited: true,
            default: Some(value),
            ..Default::default()
        }
    }
}

/// One node in a settings schema: a leaf setting or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A single setting with its requiredness.
    Setting(Requirement),
    /// A nested group of settings.
    Group(GroupSchema),
}

/// A nested group of settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSchema {
    /// Declared keys, in declaration order.
    pub entries: IndexMap<String, SchemaNode>,
    /// An open group accepts undeclared keys verbatim (the `user`
    /// scope). In a closed group, undeclared keys are warnings.
    pub open: bool,
}

impl GroupSchema {
    pub fn new() -> Self {
        GroupSchema::default()
    }

    /// An open-ended group: undeclared keys pass through unchanged.
    pub fn open() -> Self {
        GroupSchema {
            entries: IndexMap::new(),
            open: true,
        }
    }

    /// Add a leaf setting.
    pub fn setting(mut self, name: &str, requirement: Requirement) -> Self {
        self.entries
            .insert(name.to_string(), SchemaNode::Setting(requirement));
        self
    }

    /// Add a nested group.
    pub fn group(mut self, name: &str, group: GroupSchema) -> Self {
        self.entries
            .insert(name.to_string(), SchemaNode::Group(group));
        self
    }

    /// Look up a declared entry by key.
    pub fn entry(&self, name: &str) -> Option<&SchemaNode> {
        self.entries.get(name)
    }
}
