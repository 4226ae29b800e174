//! Error types for conceptdb
//!
//! One error enum shared by every crate in the workspace, with `thiserror`
//! providing `Display` and `Error` implementations.
//!
//! Absence is NOT an error: `get` returns `Ok(None)` and callers branch.
//! `RecordNotFound` exists for the places where absence violates a
//! caller-level precondition, such as resolving inheritance from a key
//! that does not exist.

use thiserror::Error;

/// Result type alias for conceptdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the concept store and its consumers
#[derive(Debug, Error)]
pub enum Error {
    /// A record required by the caller does not exist
    #[error("record not found: {relation}/{key}")]
    RecordNotFound {
        /// Relation that was searched
        relation: String,
        /// Key that was missing
        key: String,
    },

    /// Compare-and-swap failed: the stored version differs from the
    /// caller's expectation. Re-read and retry.
    #[error("version conflict on {relation}/{key}: expected {expected:?}, found {actual:?}")]
    VersionConflict {
        /// Relation addressed by the swap
        relation: String,
        /// Key addressed by the swap
        key: String,
        /// Version the caller based its write on (None = key must not exist)
        expected: Option<u64>,
        /// Version actually stored (None = key absent)
        actual: Option<u64>,
    },

    /// Caller-side key validation failure (e.g. a composite-key component
    /// containing the delimiter). Never raised by the engine itself.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Caller-side record validation failure (e.g. building a record from
    /// non-object JSON). Never raised by the engine itself.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Unrecoverable storage fault. Propagate as a hard failure; never
    /// retried internally.
    #[error("storage corruption: {0}")]
    Corruption(String),
}

impl Error {
    /// Check whether this error is retryable by re-reading and re-applying
    ///
    /// Only version conflicts are retryable; everything else is either a
    /// precondition failure or fatal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::VersionConflict { .. })
    }
}
