//! Entry point sequencing coercion, data merge and key sift.

use serde_json::{Map, Value};

use crate::data::apply_merged_data;
use crate::input::{coerce_input, coerce_options, FileInput};
use crate::record::FileRecord;
use crate::sift::sift_keys;

/// Normalizes `file` into a [`FileRecord`].
///
/// Absent input returns a freshly built default record. Strings become the
/// record's content. Partial records have their `locals`, `data` and the
/// caller `options` merged into `data`, and every property outside the
/// canonical set relocated into `orig`.
///
/// ```
/// use extend_file::extend_file;
/// use serde_json::json;
///
/// let options = json!({"locals": {"a": 2}});
/// let file = extend_file(
///     json!({"content": "foo", "data": {"a": 1}, "title": "Bar"}),
///     options.as_object(),
/// );
/// assert_eq!(file.data["a"], json!(2));
/// assert_eq!(file.orig().get("title"), Some(&json!("Bar")));
/// assert_eq!(file.orig().content(), "foo");
/// ```
pub fn extend_file(file: impl Into<FileInput>, options: Option<&Map<String, Value>>) -> FileRecord {
    extend_file_with(file, options, &[])
}

/// Same as [`extend_file`], treating `props` as additional overflow names.
pub fn extend_file_with(
    file: impl Into<FileInput>,
    options: Option<&Map<String, Value>>,
    props: &[&str],
) -> FileRecord {
    let Some(mut record) = coerce_input(file.into()) else {
        return FileRecord::default();
    };
    let options = coerce_options(options);
    apply_merged_data(&mut record, &options);
    sift_keys(record, props)
}
