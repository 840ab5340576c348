//! Line items and their identity key.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: the product plus the chosen size.
///
/// Two sizes of the same product are separate lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product in the line.
    pub product_id: ProductId,
    /// Selected size, if the product is sized.
    pub size: Option<String>,
}

impl LineKey {
    /// Key for an unsized product.
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
            size: None,
        }
    }

    /// Key for a product in a specific size.
    pub fn sized(product_id: impl Into<ProductId>, size: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            size: Some(size.into()),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.size {
            Some(size) => write!(f, "{}/{}", self.product_id, size),
            None => write!(f, "{}", self.product_id),
        }
    }
}

/// The product data captured when an item is added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Collection name.
    pub collection: String,
    /// Price in whole currency units.
    pub price: i64,
    /// Image URL.
    pub image: String,
    /// Selected size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ProductSnapshot {
    /// Identity key of the line this snapshot belongs to.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.id.clone(),
            size: self.size.clone(),
        }
    }

    /// Check the snapshot is usable as a cart line.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.is_blank() {
            return Err(CommerceError::InvalidProduct(
                "product id is required".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has no name",
                self.id
            )));
        }
        if self.price < 0 {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has a negative price ({})",
                self.id, self.price
            )));
        }
        if matches!(&self.size, Some(size) if size.trim().is_empty()) {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has an empty size",
                self.id
            )));
        }
        Ok(())
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name (captured at add time).
    pub name: String,
    /// Collection name (captured at add time).
    pub collection: String,
    /// Image URL (captured at add time).
    pub image: String,
    /// Unit price at add time, in whole currency units.
    pub price: i64,
    /// Selected size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Quantity. Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl LineItem {
    pub(crate) fn from_snapshot(snapshot: &ProductSnapshot) -> Self {
        Self {
            product_id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            collection: snapshot.collection.clone(),
            image: snapshot.image.clone(),
            price: snapshot.price,
            size: snapshot.size.clone(),
            quantity: 1,
        }
    }

    /// Identity key of this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
        }
    }

    /// The snapshot this line was captured from.
    pub(crate) fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.product_id.clone(),
            name: self.name.clone(),
            collection: self.collection.clone(),
            price: self.price,
            image: self.image.clone(),
            size: self.size.clone(),
        }
    }

    /// Whether this line has the given identity key.
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.size == key.size
    }

    /// Price × quantity.
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}
