//! Storage error types.

use thiserror::Error;

/// Errors that can occur when talking to a storage backend.
#[derive(Error, Debug)]
pub enum KvError {
    /// The backend is disabled or could not be opened.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write would push the backend past its size limit.
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Filesystem failure in a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Any other backend-specific failure.
    #[error("Store operation failed: {0}")]
    Store(String),
}
