use thiserror::Error;

/// Errors reported by [`HashTable`](crate::HashTable) operations.
///
/// Both variants are recoverable; reporting one never changes the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table was requested with zero buckets
    #[error("table capacity must be at least 1")]
    InvalidCapacity,
    /// The key is not stored in the table
    #[error("key {0:?} not found")]
    KeyNotFound(String),
}
