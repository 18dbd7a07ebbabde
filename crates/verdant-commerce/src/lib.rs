//! Product catalog and persistent shopping cart for the Verdant wall
//! planter storefront.
//!
//! - **Catalog**: immutable [`Product`] records, looked up by slug or id
//! - **Cart**: the id-unique, insertion-ordered line item collection
//! - **Store**: [`CartStore`], which restores the cart from a key-value
//!   backend on open and writes it back after every mutation
//!
//! # Example
//!
//! ```rust
//! use verdant_commerce::prelude::*;
//! use verdant_kv::MemoryStore;
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id":"starter-kit","slug":"starter-kit","name":"Starter Kit","price":2999}]"#,
//! )
//! .unwrap();
//! let kit = catalog.find_by_slug("starter-kit").unwrap();
//!
//! let mut store = CartStore::new(MemoryStore::new());
//! store.add_one(kit);
//! println!("Total: {}", store.total_price());
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub use cart::{Cart, CartItem, CartStore, CartSummary, Sanitized};
pub use catalog::{Catalog, Product};
pub use config::{CartConfig, PersistFormat};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Rupees;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartItem, CartStore, CartSummary};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::config::{CartConfig, PersistFormat};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Rupees;
}
