//! Cart persistence configuration.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Storage key the cart is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "verdant-cart";

/// Shape of the persisted cart value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistFormat {
    /// Bare JSON array of items, no version tag.
    #[default]
    Legacy,
    /// `{"version": 1, "items": [...]}` envelope.
    Versioned,
}

/// Cart store configuration.
///
/// Loadable from TOML:
///
/// ```toml
/// storage_key = "verdant-cart"
/// format = "versioned"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the cart is stored under.
    pub storage_key: String,
    /// Format used when writing. Reads accept either format.
    pub format: PersistFormat,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            format: PersistFormat::default(),
        }
    }
}

impl CartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the write format.
    pub fn with_format(mut self, format: PersistFormat) -> Self {
        self.format = format;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        let config: CartConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.storage_key.trim().is_empty() {
            return Err(CommerceError::Config(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
