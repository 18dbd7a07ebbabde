//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// A line in the cart: a product snapshot and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product as it was when first added. Never refreshed.
    pub product: Product,
    /// Quantity. Always at least 1 for items held by a [`Cart`].
    pub quantity: i64,
}

impl CartItem {
    /// Create a new line item.
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Product id of this line.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Rupees {
        self.product.price * quantity_factor(self.quantity)
    }
}

/// The cart's item collection.
///
/// Items are unique by product id and keep insertion order. No item ever has
/// a quantity below 1: every transition that would produce one removes the
/// item instead. The fields are private so those rules hold for any `Cart`
/// value, including one built from untrusted data via [`Cart::from_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from arbitrary items.
    ///
    /// Items with quantity below 1 are dropped and repeated product ids are
    /// merged into the first occurrence by summing quantities.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        Self::from_items_with_report(items).0
    }

    /// Like [`Cart::from_items`], also reporting what had to be fixed up.
    pub fn from_items_with_report(
        items: impl IntoIterator<Item = CartItem>,
    ) -> (Self, Sanitized) {
        let mut cart = Self::new();
        let mut report = Sanitized::default();
        for item in items {
            if item.quantity <= 0 {
                report.dropped += 1;
                continue;
            }
            match cart.position(item.id().as_str()) {
                Some(idx) => {
                    let existing = &mut cart.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                    report.merged += 1;
                }
                None => cart.items.push(item),
            }
        }
        (cart, report)
    }

    /// Add `quantity` of `product`.
    ///
    /// Merges into an existing line with the same id (keeping that line's
    /// product snapshot) or appends a new line. Non-positive quantities
    /// change nothing. Returns whether the cart changed.
    pub fn add(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }

        if let Some(idx) = self.position(product.id.as_str()) {
            let existing = &mut self.items[idx];
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem::new(product.clone(), quantity));
        }
        true
    }

    /// Remove the line for `id`. Returns whether it was present.
    pub fn remove(&mut self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id.as_str() != id);
        self.items.len() < len_before
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// A quantity of 0 or less removes the line. Returns whether the cart
    /// changed; an unknown id changes nothing.
    pub fn update_quantity(&mut self, id: impl AsRef<str>, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        match self.position(id.as_ref()) {
            Some(idx) => {
                let item = &mut self.items[idx];
                let changed = item.quantity != quantity;
                item.quantity = quantity;
                changed
            }
            None => false,
        }
    }

    /// Remove every line. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart and return its lines.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Get the line for a product id.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&CartItem> {
        let id = id.as_ref();
        self.items.iter().find(|i| i.product.id.as_str() == id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.get(id).is_some()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of price times quantity. No rounding or formatting.
    pub fn total_price(&self) -> Rupees {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// All derived totals at once.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items(),
            unique_items: self.unique_items(),
            total_price: self.total_price(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product.id.as_str() == id)
    }
}

/// Derived cart totals, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Sum of quantities.
    pub total_items: i64,
    /// Number of distinct products.
    pub unique_items: usize,
    /// Sum of line totals.
    pub total_price: Rupees,
}

/// Fix-ups applied while building a cart from untrusted items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sanitized {
    /// Items dropped for a quantity below 1.
    pub dropped: usize,
    /// Items folded into an earlier line with the same product id.
    pub merged: usize,
}

impl Sanitized {
    /// Check if nothing had to change.
    pub fn is_clean(&self) -> bool {
        self.dropped == 0 && self.merged == 0
    }
}

fn quantity_factor(quantity: i64) -> u64 {
    u64::try_from(quantity).unwrap_or(0)
}
