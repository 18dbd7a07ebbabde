//! Product record.

use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// A planter in the catalog.
///
/// The cart only looks at `id` and `price`; everything else is display data
/// carried along in cart snapshots. Missing optional fields default so that
/// snapshots written by older front ends still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique).
    #[serde(default)]
    pub slug: String,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Unit price.
    pub price: Rupees,
    /// Pre-discount price shown struck through, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Rupees>,
    /// One-line pitch for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Bullet-point features.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Product {
    /// Create a product. The slug starts out equal to the id.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Rupees) -> Self {
        let id = id.into();
        Self {
            slug: id.as_str().to_string(),
            id,
            name: name.into(),
            price,
            compare_at_price: None,
            tagline: None,
            description: None,
            image: None,
            features: Vec::new(),
        }
    }

    /// Set the slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the struck-through comparison price.
    pub fn with_compare_at_price(mut self, price: Rupees) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Add a feature bullet.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Check if the product is discounted against its comparison price.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price.is_some_and(|p| p > self.price)
    }

    /// Amount saved against the comparison price.
    pub fn savings(&self) -> Rupees {
        self.compare_at_price
            .map(|p| p.saturating_sub(self.price))
            .unwrap_or_default()
    }
}
