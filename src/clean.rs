//! Record cleaner.
//!
//! Repositories reject keys holding nulls or empty containers, so the
//! serialized record gets one cleaning pass before it leaves the harvester:
//!
//! - `null` values are removed everywhere;
//! - map keys whose value is an empty map or empty array are removed;
//! - array elements are kept even when they are empty maps (a parsed but
//!   contentless entity still marks that the element was present);
//! - strings are never treated as empty (`""` is meaningful input).

use serde_json::{Map, Value};

/// Clean a whole record. The top level is always returned as-is after its
/// contents have been cleaned.
#[must_use]
pub fn clean_record(value: Value) -> Value {
    clean_value(value).unwrap_or(Value::Object(Map::new()))
}

fn clean_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let mut cleaned = Map::new();
            for (key, entry) in map {
                if let Some(entry) = clean_value(entry) {
                    if !is_empty_container(&entry) {
                        cleaned.insert(key, entry);
                    }
                }
            }
            Some(Value::Object(cleaned))
        }
        Value::Array(items) => Some(Value::Array(
            items.into_iter().filter_map(clean_value).collect(),
        )),
        other => Some(other),
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nulls_removed_from_maps() {
        let cleaned = clean_record(json!({"a": null, "b": "kept"}));
        assert_eq!(cleaned, json!({"b": "kept"}));
    }

    #[test]
    fn test_empty_containers_removed_from_maps() {
        let cleaned = clean_record(json!({"a": {}, "b": [], "c": {"d": null}}));
        assert_eq!(cleaned, json!({}));
    }

    #[test]
    fn test_empty_maps_survive_in_arrays() {
        let cleaned = clean_record(json!({"provenances": [{}]}));
        assert_eq!(cleaned, json!({"provenances": [{}]}));
    }

    #[test]
    fn test_nulls_removed_from_arrays() {
        let cleaned = clean_record(json!({"items": [1, null, 2]}));
        assert_eq!(cleaned, json!({"items": [1, 2]}));
    }

    #[test]
    fn test_empty_strings_survive() {
        let cleaned = clean_record(json!({"iri": "", "label": [{"value": ""}]}));
        assert_eq!(cleaned, json!({"iri": "", "label": [{"value": ""}]}));
    }

    #[test]
    fn test_nested_cleanup_cascades() {
        let cleaned = clean_record(json!({
            "metadata": {
                "terms_of_use": {"license": {"label": []}},
                "title": "kept"
            }
        }));
        assert_eq!(cleaned, json!({"metadata": {"title": "kept"}}));
    }
}
