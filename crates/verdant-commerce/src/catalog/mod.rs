//! Read-only product catalog.
//!
//! Pages look products up by slug or id and hand them to the cart. The
//! catalog never changes after construction.

mod product;

pub use product::Product;

use crate::error::CommerceError;
use std::collections::HashSet;

/// An immutable list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids or slugs.
    ///
    /// A product without a slug takes its id as the slug, matching
    /// [`Product::new`].
    pub fn new(mut products: Vec<Product>) -> Result<Self, CommerceError> {
        for product in &mut products {
            if product.slug.is_empty() {
                product.slug = product.id.as_str().to_string();
            }
        }

        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for product in &products {
            if !ids.insert(product.id.as_str()) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if !slugs.insert(product.slug.as_str()) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product slug: {}",
                    product.slug
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Find a product by id.
    pub fn find_by_id(&self, id: impl AsRef<str>) -> Option<&Product> {
        let id = id.as_ref();
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Find a product by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        if slug.is_empty() {
            return None;
        }
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Find a product by slug, or fail with [`CommerceError::ProductNotFound`].
    pub fn require_slug(&self, slug: &str) -> Result<&Product, CommerceError> {
        self.find_by_slug(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
