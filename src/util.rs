//! Structural copies of JSON value trees.
//!
//! # Responsibilities
//! - Clone param/fetch value trees without sharing
//! - Substitute placeholder string leaves while cloning
//!
//! # Design Decisions
//! - Operates on `serde_json::Value` only; view configuration is plain data,
//!   so no arbitrary object graphs need handling
//! - Substitution and deep copy are one walk: a leaf either maps to a
//!   replacement or is copied unchanged

use std::collections::HashMap;

use serde_json::Value;

use crate::view::config::ParamMap;

/// Structurally copy `value`, replacing every string leaf that names a key in
/// `replacements` with the mapped value. Objects and arrays are rebuilt,
/// numbers/booleans/null copied as-is. The input is never mutated.
pub fn substitute(value: &Value, replacements: &HashMap<String, String>) -> Value {
    match value {
        Value::String(leaf) => match replacements.get(leaf) {
            Some(replacement) => Value::String(replacement.clone()),
            None => Value::String(leaf.clone()),
        },
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, nested)| (key.clone(), substitute(nested, replacements)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items.iter().map(|item| substitute(item, replacements)).collect(),
        ),
        other => other.clone(),
    }
}

/// [`substitute`] applied to each entry of a parameter mapping.
pub fn substitute_map(map: &ParamMap, replacements: &HashMap<String, String>) -> ParamMap {
    map.iter()
        .map(|(key, value)| (key.clone(), substitute(value, replacements)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn replacements() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("<name>".to_string(), "Miles".to_string());
        map
    }

    #[test]
    fn test_replaces_matching_string_leaves() {
        let value = json!({"q": "<name>", "page": "1"});
        let copied = substitute(&value, &replacements());
        assert_eq!(copied, json!({"q": "Miles", "page": "1"}));
    }

    #[test]
    fn test_replaces_inside_nested_mappings() {
        let value = json!({"endpoint": "/api/", "params": {"artist": "<name>"}});
        let copied = substitute(&value, &replacements());
        assert_eq!(copied["params"]["artist"], json!("Miles"));
        assert_eq!(copied["endpoint"], json!("/api/"));
    }

    #[test]
    fn test_non_string_leaves_copied_unchanged() {
        let value = json!({"limit": 10, "exact": true, "tags": ["<name>", 3]});
        let copied = substitute(&value, &replacements());
        assert_eq!(copied["limit"], json!(10));
        assert_eq!(copied["exact"], json!(true));
        assert_eq!(copied["tags"], json!(["Miles", 3]));
    }

    #[test]
    fn test_input_is_never_mutated() {
        let value = json!({"q": "<name>"});
        let _ = substitute(&value, &replacements());
        assert_eq!(value, json!({"q": "<name>"}));
    }
}
