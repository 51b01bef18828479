//! Input coercion: turns caller input into a provisional record mapping.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::record::FileRecord;

/// Legacy alias for `orig`.
pub const LEGACY_ORIG_KEY: &str = "original";

/// File-like input accepted by [`extend_file`](crate::extend_file).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FileInput {
    /// No file at all; normalizes to the default record.
    #[default]
    Absent,
    /// Bare content string. The empty string is still content.
    Raw(String),
    /// Partial record with arbitrary extra properties.
    Partial(Map<String, Value>),
}

impl FileInput {
    /// Returns true for [`FileInput::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, FileInput::Absent)
    }
}

impl From<&str> for FileInput {
    fn from(content: &str) -> Self {
        FileInput::Raw(content.to_string())
    }
}

impl From<String> for FileInput {
    fn from(content: String) -> Self {
        FileInput::Raw(content)
    }
}

impl From<Map<String, Value>> for FileInput {
    fn from(map: Map<String, Value>) -> Self {
        FileInput::Partial(map)
    }
}

impl<T: Into<FileInput>> From<Option<T>> for FileInput {
    fn from(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_default()
    }
}

impl From<FileRecord> for FileInput {
    fn from(record: FileRecord) -> Self {
        match record.to_value() {
            Value::Object(map) => FileInput::Partial(map),
            _ => FileInput::Absent,
        }
    }
}

/// Maps JSON onto the input variants.
///
/// `null`, `false` and zero are falsy and become [`FileInput::Absent`].
/// Other primitives and arrays carry no properties and become an empty
/// [`FileInput::Partial`].
impl From<Value> for FileInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => FileInput::Absent,
            Value::Number(ref n) if n.as_f64() == Some(0.0) => FileInput::Absent,
            Value::String(content) => FileInput::Raw(content),
            Value::Object(map) => FileInput::Partial(map),
            other => {
                tracing::debug!(kind = value_kind(&other), "input has no properties");
                FileInput::Partial(Map::new())
            }
        }
    }
}

impl<'de> Deserialize<'de> for FileInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FileInput::from)
    }
}

/// Produces the provisional record mapping, or `None` for absent input.
///
/// Raw strings become `{content}`; partial records are taken as they are.
/// The legacy `original` property is renamed to `orig` before returning.
pub fn coerce_input(input: FileInput) -> Option<Map<String, Value>> {
    let mut record = match input {
        FileInput::Absent => {
            tracing::trace!("absent input, using defaults");
            return None;
        }
        FileInput::Raw(content) => {
            tracing::trace!(len = content.len(), "raw content input");
            let mut map = Map::new();
            map.insert("content".into(), Value::String(content));
            map
        }
        FileInput::Partial(map) => {
            tracing::trace!(keys = map.len(), "partial record input");
            map
        }
    };
    rename_legacy_orig(&mut record);
    Some(record)
}

/// Moves a legacy `original` property to `orig`, replacing any existing value.
pub fn rename_legacy_orig(record: &mut Map<String, Value>) {
    if let Some(original) = record.remove(LEGACY_ORIG_KEY) {
        tracing::trace!("renaming legacy `original` to `orig`");
        record.insert("orig".into(), original);
    }
}

/// Copies caller options so later steps never touch the caller's mapping.
pub fn coerce_options(options: Option<&Map<String, Value>>) -> Map<String, Value> {
    options.cloned().unwrap_or_default()
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
