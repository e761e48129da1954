//! Configuration tree merging
//!
//! Trees are `serde_json::Value` objects. Layers are combined with
//! [`deep_merge`]:
//! - Objects: merged key by key (recursive)
//! - Arrays: replaced, never concatenated
//! - Scalars and null: overlay wins

use serde_json::{Map, Value};

use crate::path::parse_path;

/// An empty configuration tree.
pub fn empty_tree() -> Value {
    Value::Object(Map::new())
}

/// Deep merge `overlay` into `base`.
///
/// If both values are objects, merge them recursively with `overlay` taking
/// precedence. Otherwise, `overlay` replaces `base`.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => {
            *base = overlay;
        }
    }
}

/// Merge multiple layers in order (first is lowest, last has highest precedence).
pub fn merge_layers(layers: impl IntoIterator<Item = Value>) -> Value {
    layers.into_iter().fold(empty_tree(), |mut merged, layer| {
        deep_merge(&mut merged, layer);
        merged
    })
}

/// Rewrite object keys containing dots into nested objects.
///
/// `{"editor.tabSize": 2}` becomes `{"editor": {"tabSize": 2}}`. Keys that
/// expand onto the same object are deep merged, so `{"a.b": 1, "a": {"c": 2}}`
/// becomes `{"a": {"b": 1, "c": 2}}`. Arrays and scalars are left untouched.
pub fn expand_dotted_keys(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut expanded = empty_tree();
    for (key, child) in map {
        let child = expand_dotted_keys(child);
        let segments = parse_path(&key);
        let nested = match segments.split_first() {
            Some((first, rest)) => {
                let mut wrapper = Map::new();
                wrapper.insert((*first).to_string(), nest(rest, child));
                Value::Object(wrapper)
            }
            // Keys made only of dots cannot be addressed; keep them verbatim
            None => {
                let mut wrapper = Map::new();
                wrapper.insert(key.clone(), child);
                Value::Object(wrapper)
            }
        };
        deep_merge(&mut expanded, nested);
    }
    expanded
}

/// Wrap `value` in one object per segment, innermost last.
fn nest(segments: &[&str], value: Value) -> Value {
    segments.iter().rev().fold(value, |inner, segment| {
        let mut map = Map::new();
        map.insert((*segment).to_string(), inner);
        Value::Object(map)
    })
}
