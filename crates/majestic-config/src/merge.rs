//! Merging settings layers.
//!
//! A site's settings come in layers: the built-in defaults first,
//! then the site's own `settings.json`, then any file given on the
//! command line. Later layers win, with field-wise merging for maps
//! and concatenation for arrays. Overriding one key in a group must
//! not wipe out the rest of the group.

use serde_json::Value;

/// Merge settings layers, first layer lowest priority.
///
/// Maps merge recursively key by key; arrays concatenate in layer
/// order; anything else is replaced by the later layer. An empty
/// layer list merges to an empty mapping.
pub fn merge_layers(layers: Vec<Value>) -> Value {
    let mut merged = Value::Object(serde_json::Map::new());
    for layer in layers {
        merged = merge_pair(merged, layer);
    }
    merged
}

fn merge_pair(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.remove(&key) {
                    Some(existing) => {
                        base.insert(key, merge_pair(existing, value));
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        (Value::Array(mut base), Value::Array(overlay)) => {
            base.extend(overlay);
            Value::Array(base)
        }
        // Scalars, and any type mismatch: last layer wins.
        (_, overlay) => overlay,
    }
}
