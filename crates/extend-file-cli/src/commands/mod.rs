//! Subcommand implementations.

pub mod keys;
pub mod normalize;
pub mod sift;
