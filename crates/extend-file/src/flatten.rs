//! One-level de-nesting of a mapping that repeats its own key.

use serde_json::{Map, Value};

use crate::merge::deep_merge;

/// Collapses `o[key]` into `o` when it is a mapping, then removes `key`.
///
/// Nested values win over same-named top-level values. When `key` is absent
/// or does not hold a mapping, `o` is left unchanged.
pub fn flatten_object(o: &mut Map<String, Value>, key: &str) {
    match o.remove(key) {
        Some(Value::Object(nested)) => {
            tracing::trace!(key, nested_keys = nested.len(), "flattening nested mapping");
            deep_merge(o, &nested);
        }
        Some(other) => {
            o.insert(key.to_string(), other);
        }
        None => {}
    }
}
