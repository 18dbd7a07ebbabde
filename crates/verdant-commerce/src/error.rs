//! Commerce error types.

use thiserror::Error;
use verdant_kv::KvError;

/// Errors that can occur in catalog and cart operations.
///
/// Cart mutations never hand these to callers; they surface only from the
/// catalog, the config loader, and the persisted-format codec.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Persisted cart carries a schema version this build can't read.
    #[error("Unsupported cart schema version: {0}")]
    UnsupportedVersion(u32),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
