//! Collects metadata sources into one unified `data` mapping.

use serde_json::{Map, Value};

use crate::flatten::flatten_object;
use crate::input::value_kind;
use crate::merge::merge_all;

/// Record-level key holding locals.
pub const LOCALS_KEY: &str = "locals";
/// Record-level key holding data.
pub const DATA_KEY: &str = "data";

/// Merges the record's `locals`, its `data` and the caller options into one
/// mapping, lowest precedence first.
///
/// When `options` carries a `locals` mapping, that mapping is the override
/// source; otherwise the whole `options` mapping is. A `data` sub-mapping
/// carried by the override source is flattened one level before merging;
/// the record's own `data` is taken as it is, so normalizing a record twice
/// gives the same result. The result is always a mapping, empty when no
/// source contributed.
pub fn merge_data(record: &Map<String, Value>, options: &Map<String, Value>) -> Map<String, Value> {
    let locals = mapping_source(record, LOCALS_KEY);
    let data = mapping_source(record, DATA_KEY);
    let mut overrides = match options.get(LOCALS_KEY) {
        Some(Value::Object(locals)) => locals.clone(),
        _ => options.clone(),
    };
    flatten_object(&mut overrides, DATA_KEY);

    let merged = merge_all(locals.into_iter().chain(data).chain(Some(&overrides)));
    tracing::trace!(keys = merged.len(), "merged data");
    merged
}

/// Replaces `record.data` with the unified mapping.
///
/// A mapping (or `null`) `record.locals` is consumed and removed. Any other
/// `locals` value stays on the record so key sift relocates it into `orig`.
pub fn apply_merged_data(record: &mut Map<String, Value>, options: &Map<String, Value>) {
    let merged = merge_data(record, options);
    if matches!(record.get(LOCALS_KEY), Some(Value::Object(_) | Value::Null)) {
        record.remove(LOCALS_KEY);
    }
    record.insert(DATA_KEY.into(), Value::Object(merged));
}

fn mapping_source<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match record.get(key) {
        Some(Value::Object(map)) => Some(map),
        Some(Value::Null) | None => None,
        Some(other) => {
            tracing::debug!(key, kind = value_kind(other), "skipping non-mapping data source");
            None
        }
    }
}
