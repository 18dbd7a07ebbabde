//! The persistent cart store.

use crate::cart::{persist, Cart, CartItem, CartSummary};
use crate::catalog::Product;
use crate::config::CartConfig;
use crate::error::CommerceError;
use crate::money::Rupees;
use verdant_kv::KeyValueStore;

/// Owns the session's cart and keeps it in sync with storage.
///
/// Construct one per UI session at the root of the application and hand out
/// references. Mutations take `&mut self` and return the updated [`Cart`];
/// readers only ever see `&Cart`.
///
/// Storage is best-effort. A missing or unreadable value restores as an
/// empty cart, and a failed write keeps the in-memory change. Neither case
/// reaches the caller; both are logged with `tracing` at `warn` level.
///
/// # Example
///
/// ```
/// use verdant_commerce::prelude::*;
/// use verdant_kv::MemoryStore;
///
/// let mut store = CartStore::new(MemoryStore::new());
/// let kit = Product::new("starter-kit", "Starter Kit", Rupees::new(2999));
///
/// store.add_to_cart(&kit, 1);
/// store.add_to_cart(&kit, 2);
/// assert_eq!(store.total_items(), 3);
/// assert_eq!(store.total_price(), Rupees::new(8997));
///
/// store.update_quantity("starter-kit", 0);
/// assert!(store.cart().is_empty());
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    config: CartConfig,
    cart: Cart,
    revision: u64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a store with the default configuration, restoring any saved cart.
    pub fn new(storage: S) -> Self {
        Self::open(storage, CartConfig::default())
    }

    /// Open a store, restoring the cart saved under `config.storage_key`.
    ///
    /// Never fails: anything that goes wrong while restoring yields an empty
    /// cart.
    pub fn open(storage: S, config: CartConfig) -> Self {
        let cart = restore(&storage, &config);
        Self {
            storage,
            config,
            cart,
            revision: 0,
        }
    }

    /// Add `quantity` of `product`, merging with an existing line.
    ///
    /// Quantities of 0 or less leave the items untouched.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> &Cart {
        if !self.cart.add(product, quantity) {
            tracing::debug!(
                product_id = %product.id,
                quantity,
                "ignoring non-positive add quantity"
            );
        }
        self.commit()
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) -> &Cart {
        self.add_to_cart(product, 1)
    }

    /// Remove the line for `id`, if present.
    pub fn remove_from_cart(&mut self, id: impl AsRef<str>) -> &Cart {
        self.cart.remove(id);
        self.commit()
    }

    /// Set the quantity for `id`. 0 or less removes the line.
    pub fn update_quantity(&mut self, id: impl AsRef<str>, quantity: i64) -> &Cart {
        self.cart.update_quantity(id, quantity);
        self.commit()
    }

    /// Empty the cart. Storage keeps the key, holding an empty cart.
    pub fn clear_cart(&mut self) -> &Cart {
        self.cart.clear();
        self.commit()
    }

    /// Discard in-memory state and restore from storage again.
    pub fn reload(&mut self) -> &Cart {
        self.cart = restore(&self.storage, &self.config);
        self.revision += 1;
        &self.cart
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Sum of price times quantity.
    pub fn total_price(&self) -> Rupees {
        self.cart.total_price()
    }

    /// All derived totals at once.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Bumped by every mutation; use it to memoize derived values.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Configuration the store was opened with.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self) -> &Cart {
        self.revision += 1;
        self.persist();
        &self.cart
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(
                key = %self.config.storage_key,
                error = %e,
                "failed to persist cart, keeping in-memory state"
            );
        }
    }

    fn try_persist(&self) -> Result<(), CommerceError> {
        let raw = persist::encode(&self.cart, self.config.format)?;
        self.storage.set(&self.config.storage_key, &raw)?;
        tracing::trace!(
            key = %self.config.storage_key,
            bytes = raw.len(),
            "cart persisted"
        );
        Ok(())
    }
}

fn restore<S: KeyValueStore>(storage: &S, config: &CartConfig) -> Cart {
    match try_restore(storage, config) {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!(
                key = %config.storage_key,
                error = %e,
                "failed to restore cart, starting empty"
            );
            Cart::new()
        }
    }
}

fn try_restore<S: KeyValueStore>(storage: &S, config: &CartConfig) -> Result<Cart, CommerceError> {
    match storage.get(&config.storage_key)? {
        Some(raw) => {
            let (cart, report) = persist::decode_with_report(&raw)?;
            if !report.is_clean() {
                tracing::debug!(
                    key = %config.storage_key,
                    dropped = report.dropped,
                    merged = report.merged,
                    "sanitized restored cart"
                );
            }
            tracing::debug!(
                key = %config.storage_key,
                items = cart.unique_items(),
                "cart restored"
            );
            Ok(cart)
        }
        None => Ok(Cart::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PersistFormat, DEFAULT_STORAGE_KEY};
    use verdant_kv::{KvError, MemoryStore};

    fn starter_kit() -> Product {
        Product::new("starter-kit", "Starter Kit", Rupees::new(2999))
    }

    fn hex_trio() -> Product {
        Product::new("hex-trio", "Hexagon Trio", Rupees::new(3499))
    }

    fn stored(store: &CartStore<MemoryStore>) -> Option<String> {
        store.storage().get(DEFAULT_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_starter_kit_scenario() {
        let mut store = CartStore::new(MemoryStore::new());
        let kit = starter_kit();

        store.add_to_cart(&kit, 1);
        assert_eq!(store.total_items(), 1);
        assert_eq!(store.total_price(), Rupees::new(2999));

        let cart = store.add_to_cart(&kit, 2);
        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.get("starter-kit").unwrap().quantity, 3);
        assert_eq!(store.total_price(), Rupees::new(8997));

        store.update_quantity("starter-kit", 0);
        assert!(store.cart().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), Rupees::zero());
    }

    #[test]
    fn test_absent_key_starts_empty() {
        let store = CartStore::new(MemoryStore::new());
        assert!(store.cart().is_empty());
        assert_eq!(store.revision(), 0);
        // Opening alone writes nothing.
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn test_corrupted_value_starts_empty() {
        let backend = MemoryStore::new();
        backend.set(DEFAULT_STORAGE_KEY, "{\"oops").unwrap();
        let store = CartStore::new(backend);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_unreadable_storage_starts_empty() {
        let store = CartStore::new(MemoryStore::disabled());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_restore_sanitizes_stored_value() {
        let backend = MemoryStore::new();
        backend
            .set(
                DEFAULT_STORAGE_KEY,
                r#"[{"product":{"id":"starter-kit","price":2999},"quantity":1},
                    {"product":{"id":"hex-trio","price":3499},"quantity":0},
                    {"product":{"id":"starter-kit","price":2999},"quantity":2}]"#,
            )
            .unwrap();

        let store = CartStore::new(backend);
        assert_eq!(store.cart().unique_items(), 1);
        assert_eq!(store.total_items(), 3);
        assert!(!store.cart().contains("hex-trio"));
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_one(&starter_kit());
        store.add_to_cart(&hex_trio(), 2);

        let restored = persist::decode(&stored(&store).unwrap()).unwrap();
        assert_eq!(&restored, store.cart());

        store.remove_from_cart("starter-kit");
        let restored = persist::decode(&stored(&store).unwrap()).unwrap();
        assert_eq!(restored.unique_items(), 1);

        store.update_quantity("hex-trio", 7);
        let restored = persist::decode(&stored(&store).unwrap()).unwrap();
        assert_eq!(restored.total_items(), 7);
    }

    #[test]
    fn test_clear_writes_empty_array() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_one(&starter_kit());
        store.clear_cart();
        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_restore_roundtrip_preserves_order() {
        let backend = MemoryStore::new();
        {
            let mut store = CartStore::new(&backend);
            store.add_to_cart(&hex_trio(), 2);
            store.add_to_cart(&starter_kit(), 1);
            store.add_to_cart(&hex_trio(), 1);
        }

        let store = CartStore::new(&backend);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["hex-trio", "starter-kit"]);
        assert_eq!(store.cart().get("hex-trio").unwrap().quantity, 3);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let backend = MemoryStore::new();
        let mut store = CartStore::new(&backend);
        store.add_one(&starter_kit());

        backend.set_enabled(false);
        let cart = store.add_to_cart(&hex_trio(), 2);
        assert_eq!(cart.unique_items(), 2);
        assert_eq!(store.total_items(), 3);

        // Storage still holds the last successful write.
        backend.set_enabled(true);
        let saved = persist::decode(&backend.get(DEFAULT_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved.unique_items(), 1);
    }

    #[test]
    fn test_quota_exceeded_is_silent() {
        let mut store = CartStore::new(MemoryStore::with_quota(64));
        for i in 0..10 {
            let product = Product::new(format!("planter-{i}"), "Planter", Rupees::new(999));
            store.add_one(&product);
        }
        assert_eq!(store.cart().unique_items(), 10);
        assert_eq!(stored(&store), None);

        let raw = persist::encode(store.cart(), PersistFormat::Legacy).unwrap();
        assert!(matches!(
            store.storage().set(DEFAULT_STORAGE_KEY, &raw),
            Err(KvError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_non_positive_add_still_commits() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_to_cart(&starter_kit(), 0);
        assert!(store.cart().is_empty());
        assert_eq!(store.revision(), 1);
        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_update_and_remove_unknown_are_noops() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_one(&starter_kit());
        store.update_quantity("ghost", 4);
        store.remove_from_cart("ghost");
        assert_eq!(store.total_items(), 1);
    }

    #[test]
    fn test_revision_counts_mutations() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_one(&starter_kit());
        store.update_quantity("starter-kit", 2);
        store.clear_cart();
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_versioned_format_and_custom_key() {
        let config = CartConfig::new()
            .with_storage_key("planter-cart")
            .with_format(PersistFormat::Versioned);
        let mut store = CartStore::open(MemoryStore::new(), config);
        assert_eq!(store.config().storage_key, "planter-cart");
        store.add_one(&starter_kit());

        let raw = store.storage().get("planter-cart").unwrap().unwrap();
        assert!(raw.starts_with(r#"{"version":1"#));
        assert_eq!(store.storage().get(DEFAULT_STORAGE_KEY).unwrap(), None);

        let backend = store.into_storage();
        let reopened = CartStore::open(backend, CartConfig::new().with_storage_key("planter-cart"));
        assert_eq!(reopened.total_items(), 1);
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let backend = MemoryStore::new();
        let mut store = CartStore::new(&backend);
        store.add_one(&starter_kit());

        let mut other = CartStore::new(&backend);
        other.add_to_cart(&hex_trio(), 5);

        assert_eq!(store.total_items(), 1);
        store.reload();
        assert_eq!(store.total_items(), 6);
    }

    #[test]
    fn test_summary() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_to_cart(&starter_kit(), 2);
        store.add_one(&hex_trio());
        let summary = store.summary();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.unique_items, 2);
        assert_eq!(summary.total_price, Rupees::new(2 * 2999 + 3499));
    }
}
