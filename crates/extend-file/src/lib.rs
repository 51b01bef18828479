//! Normalization of file-like inputs into a canonical file record.
//!
//! A record always carries exactly `path`, `content`, `data` and `orig`, so
//! parser chains can rely on one shape no matter how the record was built
//! upstream. Normalization is total and stateless:
//! - input coercion turns a string or partial record into a working mapping
//! - data merge unifies `locals`, `data` and caller options into `data`
//! - flatten collapses a nested `data` mapping one level
//! - key sift keeps the canonical fields and relocates the rest into `orig`
//!
#![deny(missing_docs)]

/// Metadata merge across record and options.
pub mod data;
/// Error types for record mutation.
pub mod errors;
/// The `extend_file` entry point.
pub mod extend;
/// One-level de-nesting.
pub mod flatten;
/// Input variants and coercion.
pub mod input;
/// Recursive merge over JSON mappings.
pub mod merge;
/// The canonical record type.
pub mod record;
/// Canonical/overflow key partitioning.
pub mod sift;

pub use data::merge_data;
pub use errors::RecordError;
pub use extend::{extend_file, extend_file_with};
pub use flatten::flatten_object;
pub use input::FileInput;
pub use merge::deep_merge;
pub use record::{FileRecord, Orig, OrigMut, CANONICAL_KEYS};
pub use sift::sift_keys;
