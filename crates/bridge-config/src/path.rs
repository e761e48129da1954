//! Dotted path parsing and traversal
//!
//! Configuration keys are addressed with dot-separated paths such as
//! `cody.autocomplete.advanced.provider`. Each segment names a key in a
//! nested JSON object.
//!
//! # Examples
//!
//! ```
//! use bridge_config::path::{get_at_path, parse_path, set_at_path};
//! use serde_json::json;
//!
//! let mut tree = json!({});
//! assert!(set_at_path(&mut tree, &parse_path("cody.debug.verbose"), json!(true)));
//! assert_eq!(tree, json!({"cody": {"debug": {"verbose": true}}}));
//! assert_eq!(get_at_path(&tree, &parse_path("cody.debug")), Some(&json!({"verbose": true})));
//! ```

use serde_json::{Map, Value};

/// Split a dotted path into its segments.
///
/// Empty segments are dropped, so `""` yields no segments and `"a..b"` is
/// the same path as `"a.b"`.
///
/// ```
/// use bridge_config::path::parse_path;
///
/// assert_eq!(parse_path("cody.codebase"), vec!["cody", "codebase"]);
/// assert_eq!(parse_path(".cody..codebase."), vec!["cody", "codebase"]);
/// assert!(parse_path("").is_empty());
/// ```
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|segment| !segment.is_empty()).collect()
}

/// Join a section prefix and a relative path into one dotted path.
///
/// ```
/// use bridge_config::path::join_path;
///
/// assert_eq!(join_path("cody", "autocomplete.enabled"), "cody.autocomplete.enabled");
/// assert_eq!(join_path("", "editor"), "editor");
/// assert_eq!(join_path("cody.", ""), "cody");
/// ```
pub fn join_path(prefix: &str, path: &str) -> String {
    parse_path(prefix)
        .into_iter()
        .chain(parse_path(path))
        .collect::<Vec<_>>()
        .join(".")
}

/// Get the value at the given path.
///
/// Returns `None` when a segment is missing or when a non-object value is
/// reached while segments remain. No segments returns the root itself.
pub fn get_at_path<'a>(value: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(value);
    };

    match value {
        Value::Object(map) => get_at_path(map.get(*first)?, rest),
        _ => None,
    }
}

/// Set a value at the given path, creating intermediate objects as needed.
///
/// Intermediate values that are not objects are replaced by empty objects.
/// The final segment is assigned outright; whatever was there before is
/// dropped. Returns `false` only when there are no segments to assign.
pub fn set_at_path(value: &mut Value, segments: &[&str], new_value: Value) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };

    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    let Value::Object(map) = value else {
        return false;
    };

    if rest.is_empty() {
        map.insert((*first).to_string(), new_value);
        return true;
    }

    let child = map
        .entry((*first).to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    set_at_path(child, rest, new_value)
}
