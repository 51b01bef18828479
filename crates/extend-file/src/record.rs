use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::RecordError;
use crate::input::FileInput;

/// Field names every normalized record carries, in serialization order.
pub const CANONICAL_KEYS: [&str; 4] = ["path", "content", "data", "orig"];

/// Name of the derived field exposed on `orig`.
pub(crate) const ORIG_CONTENT: &str = "content";

/// Returns true when `key` is one of [`CANONICAL_KEYS`].
pub fn is_canonical_key(key: &str) -> bool {
    CANONICAL_KEYS.contains(&key)
}

/// Normalized file record handed to downstream parsers.
///
/// The top-level shape is fixed to `path`, `content`, `data` and `orig`.
/// `orig` stores the properties the input carried outside the canonical set
/// and exposes a derived `content` that always mirrors [`FileRecord::content`]
/// at read time.
///
/// Deserializing accepts any JSON value and normalizes it the same way as
/// [`extend_file`](crate::extend_file) without options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "FileInput")]
pub struct FileRecord {
    /// Source location; never inspected.
    pub path: String,
    /// Current textual payload.
    pub content: String,
    /// Unified metadata.
    pub data: Map<String, Value>,
    orig: Map<String, Value>,
}

impl FileRecord {
    /// Creates a record holding only `content`.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Assembles a record from its parts.
    ///
    /// A stored `content` entry in `orig` is dropped; the derived view takes
    /// its place.
    pub fn from_parts(
        path: impl Into<String>,
        content: impl Into<String>,
        data: Map<String, Value>,
        mut orig: Map<String, Value>,
    ) -> Self {
        orig.remove(ORIG_CONTENT);
        Self {
            path: path.into(),
            content: content.into(),
            data,
            orig,
        }
    }

    /// Read view over `orig`, including the derived `content`.
    pub fn orig(&self) -> Orig<'_> {
        Orig { record: self }
    }

    /// Write access to the stored part of `orig`.
    pub fn orig_mut(&mut self) -> OrigMut<'_> {
        OrigMut {
            orig: &mut self.orig,
        }
    }

    /// Value of the derived `orig.content`, which is the current `content`.
    pub fn orig_content(&self) -> &str {
        &self.content
    }

    /// Converts the record into its JSON form with `orig.content` materialized.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("path".into(), Value::String(self.path.clone()));
        map.insert("content".into(), Value::String(self.content.clone()));
        map.insert("data".into(), Value::Object(self.data.clone()));
        map.insert("orig".into(), Value::Object(self.orig().to_map()));
        Value::Object(map)
    }
}

impl Serialize for FileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileRecord", CANONICAL_KEYS.len())?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("orig", &self.orig().to_map())?;
        state.end()
    }
}

impl From<FileInput> for FileRecord {
    fn from(input: FileInput) -> Self {
        crate::extend::extend_file(input, None)
    }
}

/// Read-only view over a record's `orig` mapping.
#[derive(Debug, Clone, Copy)]
pub struct Orig<'a> {
    record: &'a FileRecord,
}

impl<'a> Orig<'a> {
    /// The record's current content.
    pub fn content(&self) -> &'a str {
        &self.record.content
    }

    /// Looks up a stored key. `content` is not stored; use [`Orig::content`].
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.record.orig.get(key)
    }

    /// Returns true when `key` is stored or is the derived `content`.
    pub fn contains_key(&self, key: &str) -> bool {
        key == ORIG_CONTENT || self.record.orig.contains_key(key)
    }

    /// Stored keys, without the derived `content`.
    pub fn keys(&self) -> impl Iterator<Item = &'a String> {
        self.record.orig.keys()
    }

    /// Stored entries, without the derived `content`.
    pub fn stored(&self) -> &'a Map<String, Value> {
        &self.record.orig
    }

    /// Snapshot of stored entries plus `content` as read right now.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.record.orig.clone();
        map.insert(
            ORIG_CONTENT.to_string(),
            Value::String(self.record.content.clone()),
        );
        map
    }
}

/// Mutable access to the stored part of a record's `orig` mapping.
#[derive(Debug)]
pub struct OrigMut<'a> {
    orig: &'a mut Map<String, Value>,
}

impl OrigMut<'_> {
    /// Inserts a stored entry, returning the previous value.
    ///
    /// Writing `content` is rejected because it is derived from the record.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, RecordError> {
        let key = key.into();
        if key == ORIG_CONTENT {
            return Err(RecordError::ReadOnlyField(ORIG_CONTENT));
        }
        Ok(self.orig.insert(key, value))
    }

    /// Removes a stored entry. Removing `content` is rejected.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>, RecordError> {
        if key == ORIG_CONTENT {
            return Err(RecordError::ReadOnlyField(ORIG_CONTENT));
        }
        Ok(self.orig.remove(key))
    }
}
