//! Output formatting utilities.

use extend_file::FileRecord;

/// Formats a record as pretty JSON or canonical JSON.
pub fn format_record(
    record: &FileRecord,
    canonical: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let value = record.to_value();
    if canonical {
        canonical_json::to_string(&value)
            .map_err(|e| format!("Canonicalization failed: {}", e).into())
    } else {
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
