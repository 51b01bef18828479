use thiserror::Error;

/// Errors raised when mutating a normalized record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The field is derived from another field and cannot be written.
    #[error("{0} is a derived read-only field")]
    ReadOnlyField(&'static str),
}
