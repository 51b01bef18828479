//! Recursive merge over JSON mappings.
//!
//! Only mapping values merge recursively. Arrays, scalars and `null` replace
//! the target value wholesale, with the later source winning.

use serde_json::{Map, Value};

/// Merges `source` into `target`, recursing into nested mappings.
pub fn deep_merge(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Merges a single value into `target`.
///
/// Mapping into mapping recurses; every other combination replaces.
pub fn merge_value(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(dst), Value::Object(src)) => deep_merge(dst, src),
        (dst, src) => *dst = src.clone(),
    }
}

/// Folds `sources` left to right into a fresh mapping.
pub fn merge_all<'a, I>(sources: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let mut merged = Map::new();
    for source in sources {
        deep_merge(&mut merged, source);
    }
    merged
}
