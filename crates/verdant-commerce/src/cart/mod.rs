//! Shopping cart module.
//!
//! [`Cart`] is the pure item collection and its transitions; [`CartStore`]
//! wraps it with persistence against a [`verdant_kv::KeyValueStore`].

mod cart;
pub mod persist;
mod store;

pub use cart::{Cart, CartItem, CartSummary, Sanitized};
pub use store::CartStore;
