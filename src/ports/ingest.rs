//! Ingestion port: Trait for dataset sources.
//!
//! This trait abstracts where cohort rows come from (a CSV path, a pasted
//! file) from the state store that consumes them.

use crate::domain::Record;

/// A one-shot producer of cohort records.
///
/// Implementations skip malformed or empty rows instead of failing the
/// whole load, and must not touch application state: the caller hands the
/// finished sequence to the state store.
pub trait DatasetSource: Send {
    /// Error type for a failed load (source unreachable or unparseable).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short label for status lines and logs.
    fn describe(&self) -> String;

    /// Read every record.
    ///
    /// # Errors
    /// Returns error if the source cannot be opened or has no usable header.
    fn load(&self) -> Result<Vec<Record>, Self::Error>;
}
