//! Partitions a record mapping into canonical fields and `orig` overflow.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::input::value_kind;
use crate::merge::deep_merge;
use crate::record::{is_canonical_key, FileRecord, CANONICAL_KEYS};

/// Key under which a non-mapping `orig` value is preserved.
pub const ORIG_VALUE_KEY: &str = "value";

/// Default values of the canonical fields as a mapping.
pub fn canonical_defaults() -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert("path".into(), Value::String(String::new()));
    defaults.insert("content".into(), Value::String(String::new()));
    defaults.insert("data".into(), Value::Object(Map::new()));
    defaults.insert("orig".into(), Value::Object(Map::new()));
    defaults
}

/// Names that land in `orig`: every key of `merged` plus `props`, minus the
/// canonical fields.
pub fn overflow_keys<'a>(merged: &'a Map<String, Value>, props: &[&'a str]) -> BTreeSet<&'a str> {
    merged
        .keys()
        .map(String::as_str)
        .chain(props.iter().copied())
        .filter(|key| !is_canonical_key(key))
        .collect()
}

/// Builds a record with exactly the canonical fields from `obj`.
///
/// `props` names extra keys to treat as known overflow; they are only
/// relocated when present on `obj`. Unknown keys move into `orig`, merged
/// over whatever `orig` the input already carried.
pub fn sift_keys(obj: Map<String, Value>, props: &[&str]) -> FileRecord {
    let mut merged = canonical_defaults();
    deep_merge(&mut merged, &obj);

    let overflow = overflow_keys(&merged, props);
    if !overflow.is_empty() {
        tracing::trace!(keys = ?overflow, "relocating overflow keys into orig");
    }

    let mut orig = orig_mapping(merged.get("orig"));
    let overflow_values: Map<String, Value> = overflow
        .iter()
        .filter_map(|key| merged.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect();
    deep_merge(&mut orig, &overflow_values);

    let path = text_field(&merged, CANONICAL_KEYS[0]);
    let content = text_field(&merged, CANONICAL_KEYS[1]);
    let data = match merged.remove(CANONICAL_KEYS[2]) {
        Some(Value::Object(data)) => data,
        Some(other) => {
            tracing::debug!(kind = value_kind(&other), "non-mapping data replaced by default");
            Map::new()
        }
        None => Map::new(),
    };

    FileRecord::from_parts(path, content, data, orig)
}

fn orig_mapping(value: Option<&Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(orig)) => orig.clone(),
        Some(Value::Null) | None => Map::new(),
        Some(other) => {
            tracing::debug!(kind = value_kind(other), "preserving non-mapping orig");
            let mut orig = Map::new();
            orig.insert(ORIG_VALUE_KEY.into(), other.clone());
            orig
        }
    }
}

fn text_field(merged: &Map<String, Value>, key: &str) -> String {
    match merged.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => {
            tracing::debug!(key, kind = value_kind(other), "non-text field replaced by default");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn empty_input_gets_defaults() {
        let record = sift_keys(Map::new(), &[]);
        assert_eq!(record, FileRecord::default());
    }

    #[test]
    fn unknown_keys_move_to_orig() {
        let record = sift_keys(map(json!({"content": "foo", "title": "Bar"})), &[]);
        assert_eq!(record.orig().get("title"), Some(&json!("Bar")));
        assert_eq!(
            record.to_value(),
            json!({
                "path": "",
                "content": "foo",
                "data": {},
                "orig": {"content": "foo", "title": "Bar"}
            })
        );
    }

    #[test]
    fn overflow_merges_over_existing_orig() {
        let obj = map(json!({
            "orig": {"title": "Old", "meta": {"a": 1}},
            "title": "New",
            "meta": {"b": 2}
        }));
        let record = sift_keys(obj, &[]);
        assert_eq!(
            Value::Object(record.orig().stored().clone()),
            json!({"title": "New", "meta": {"a": 1, "b": 2}})
        );
    }

    #[test]
    fn overflow_key_set_excludes_canonical_names() {
        let merged = map(json!({"path": "", "content": "", "x": 1, "y": 2}));
        let keys = overflow_keys(&merged, &["z", "data", "x"]);
        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn absent_props_select_nothing() {
        let record = sift_keys(map(json!({"content": "foo"})), &["missing"]);
        assert!(!record.orig().contains_key("missing"));
        assert_eq!(record.orig().stored().len(), 0);
    }

    #[test]
    fn stored_orig_content_is_replaced_by_derived_view() {
        let obj = map(json!({"content": "new", "orig": {"content": "old"}}));
        let record = sift_keys(obj, &[]);
        assert_eq!(record.orig().content(), "new");
        assert_eq!(record.orig().get("content"), None);
    }

    #[test]
    fn scalar_orig_is_preserved_under_value() {
        let record = sift_keys(map(json!({"orig": "front-matter-foo"})), &[]);
        assert_eq!(record.orig().get("value"), Some(&json!("front-matter-foo")));
    }

    #[test]
    fn canonical_fields_are_coerced() {
        let obj = map(json!({"path": 7, "content": ["x"], "data": "nope"}));
        let record = sift_keys(obj, &[]);
        assert_eq!(record.path, "7");
        assert_eq!(record.content, "");
        assert!(record.data.is_empty());
    }
}
