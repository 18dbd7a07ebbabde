//! Typed JSON access over any [`KeyValueStore`].

use serde::{de::DeserializeOwned, Serialize};

use crate::{KeyValueStore, KvError};

/// Type-safe wrapper that serializes values as JSON.
///
/// # Example
///
/// ```
/// use verdant_kv::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set("ids", &vec!["a", "b"]).unwrap();
/// let ids: Option<Vec<String>> = cache.get("ids").unwrap();
/// assert_eq!(ids.unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), KvError> {
        self.store.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, KvError> {
        self.store.exists(key)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the wrapper and return the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
