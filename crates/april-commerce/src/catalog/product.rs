//! Product and collection records.

use crate::cart::ProductSnapshot;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Markup applied to derive the struck-through "was" price.
pub const COMPARE_AT_MARKUP: f64 = 1.2;

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Collection this product belongs to.
    pub collection: String,
    /// Price in whole currency units.
    pub price: i64,
    /// Image URL.
    pub image: String,
    /// Fabric description.
    pub fabric: String,
    /// Optional merchandising badge (e.g., "Bestseller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Short description.
    pub description: String,
    /// Sizes this product is offered in. Empty for unsized products.
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// The struck-through "was" price shown next to the current price.
    pub fn compare_at_price(&self) -> i64 {
        (self.price as f64 * COMPARE_AT_MARKUP).round() as i64
    }

    /// Whether the product is offered in the given size.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Snapshot for adding to the cart without a size.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            collection: self.collection.clone(),
            price: self.price,
            image: self.image.clone(),
            size: None,
        }
    }

    /// Snapshot for adding to the cart in a specific size.
    pub fn snapshot_with_size(&self, size: impl Into<String>) -> ProductSnapshot {
        ProductSnapshot {
            size: Some(size.into()),
            ..self.snapshot()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CommerceError> {
        if self.id.is_blank() {
            return Err(CommerceError::InvalidProduct(format!(
                "product '{}' has an empty id",
                self.name
            )));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has no name",
                self.id
            )));
        }
        if self.price < 0 {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has a negative price",
                self.id
            )));
        }
        Ok(())
    }
}

/// A curated collection shown in the collections carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Collection number.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Tagline.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Number of pieces in the collection.
    pub product_count: u32,
    /// Price of the collection's essential piece.
    pub price: i64,
}

impl Collection {
    /// Offset between a collection id and its essential piece's product id.
    pub const ESSENTIAL_ID_OFFSET: u32 = 100;

    /// Product id of the collection's quick-add essential piece.
    pub fn essential_id(&self) -> ProductId {
        let id = u64::from(self.id) + u64::from(Self::ESSENTIAL_ID_OFFSET);
        ProductId::new(id.to_string())
    }

    /// Snapshot of the collection's essential piece, used by quick-add.
    pub fn essential(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.essential_id(),
            name: format!("{} Essential", self.name),
            collection: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            size: None,
        }
    }
}
