//! Synchronous key-value storage backends for the Verdant cart.
//!
//! The cart persists itself as a single string under a well-known key. This
//! crate provides the seam it writes through ([`KeyValueStore`]) and the
//! backends that sit behind it:
//!
//! - [`MemoryStore`]: in-process, with optional quota and an off switch
//! - [`FileStore`]: one file per key in a directory
//! - `SpinStore`: Spin's Key-Value Store (wasm32 only)
//!
//! [`Cache`] layers typed JSON access over any of them.
//!
//! # Example
//!
//! ```
//! use verdant_kv::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("verdant-cart", "[]").unwrap();
//! assert_eq!(store.get("verdant-cart").unwrap().as_deref(), Some("[]"));
//! ```

mod cache;
mod error;
mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod spin;
mod store;

pub use cache::Cache;
pub use error::KvError;
pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinStore;
pub use store::KeyValueStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, FileStore, KeyValueStore, KvError, MemoryStore};
}
