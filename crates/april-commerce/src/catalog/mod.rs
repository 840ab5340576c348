//! Product catalog module.
//!
//! The catalog is an ordered, read-only list of products plus the curated
//! collections. It is supplied once at startup and never mutated by the cart.

mod data;
mod product;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

pub use product::{Collection, Product, COMPARE_AT_MARKUP};

/// Raw catalog contents as read from a data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Catalog currency.
    #[serde(default)]
    pub currency: Currency,
    /// Products, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Curated collections, in display order.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// A validated, immutable catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    currency: Currency,
    products: Vec<Product>,
    collections: Vec<Collection>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate product ids and
    /// negative prices.
    pub fn new(data: CatalogData) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &data.products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }

        let mut collection_ids = HashSet::new();
        for collection in &data.collections {
            if collection.price < 0 {
                return Err(CommerceError::InvalidProduct(format!(
                    "collection {} has a negative price",
                    collection.id
                )));
            }
            if !collection_ids.insert(collection.id) {
                return Err(CommerceError::InvalidProduct(format!(
                    "duplicate collection id {}",
                    collection.id
                )));
            }
            // Quick-add ids share the product id space.
            let essential = collection.essential_id();
            if seen.contains(&essential) {
                return Err(CommerceError::DuplicateProduct(essential.to_string()));
            }
        }

        Ok(Self {
            currency: data.currency,
            products: data.products,
            collections: data.collections,
        })
    }

    /// The built-in APRIL catalog.
    pub fn april() -> Self {
        Self {
            currency: Currency::INR,
            products: data::products(),
            collections: data::collections(),
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Catalog currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All collections in display order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The featured product (the first in the catalog).
    pub fn featured(&self) -> Option<&Product> {
        self.products.first()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it does not exist.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a collection by id, failing if it does not exist.
    pub fn require_collection(&self, id: u32) -> Result<&Collection, CommerceError> {
        self.collections
            .iter()
            .find(|c| c.id == id)
            .ok_or(CommerceError::CollectionNotFound(id))
    }

    /// Products belonging to the named collection.
    pub fn in_collection<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.collection == name)
    }

    /// Format a whole-unit price in the catalog currency.
    pub fn price(&self, amount: i64) -> Money {
        Money::new(amount, self.currency)
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CommerceError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::new(data)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::april()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::april();
        let data = CatalogData {
            currency: catalog.currency(),
            products: catalog.products().to_vec(),
            collections: catalog.collections().to_vec(),
        };
        assert!(Catalog::new(data).is_ok());
        assert_eq!(catalog.collections().len(), 4);
    }

    #[test]
    fn test_featured_is_twilight_dress() {
        let catalog = Catalog::april();
        let featured = catalog.featured().unwrap();
        assert_eq!(featured.name, "The Twilight Dress");
        assert!(featured.offers_size("M"));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::april();
        assert!(catalog.get(&ProductId::new("1")).is_some());
        assert!(matches!(
            catalog.require(&ProductId::new("missing")),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert_eq!(catalog.require_collection(3).unwrap().name, "Silver Mist");
        assert!(matches!(
            catalog.require_collection(9),
            Err(CommerceError::CollectionNotFound(9))
        ));
    }

    #[test]
    fn test_in_collection() {
        let catalog = Catalog::april();
        let names: Vec<_> = catalog
            .in_collection("Silver Mist")
            .map(|p| p.name.as_str())
            .collect();
        assert!(!names.is_empty());
        assert!(catalog
            .in_collection("Silver Mist")
            .all(|p| p.collection == "Silver Mist"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::april();
        let mut products = catalog.products().to_vec();
        products.push(products[0].clone());

        let result = Catalog::new(CatalogData {
            currency: Currency::INR,
            products,
            collections: Vec::new(),
        });
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id == "1"));
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{
            "products": [
                {"id": "a", "name": "Scarf", "collection": "Silver Mist", "price": 999,
                 "image": "scarf.jpg", "fabric": "Wool", "description": "Warm."},
                {"id": "a", "name": "Hat", "collection": "Silver Mist", "price": 499,
                 "image": "hat.jpg", "fabric": "Wool", "description": "Warm."}
            ]
        }"#;
        assert!(Catalog::from_json(json).is_err());

        let json = r#"{
            "currency": "USD",
            "products": [
                {"id": "a", "name": "Scarf", "collection": "Silver Mist", "price": 999,
                 "image": "scarf.jpg", "fabric": "Wool", "description": "Warm.",
                 "sizes": ["S", "M"]}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.currency(), Currency::USD);
        assert_eq!(catalog.products()[0].sizes.len(), 2);
        assert!(catalog.products()[0].badge.is_none());
    }

    #[test]
    fn test_largest_collection_id_loads() {
        let json = r#"{
            "collections": [
                {"id": 4294967295, "name": "Last", "description": "", "image": "",
                 "product_count": 1, "price": 100}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(
            catalog.collections()[0].essential_id().as_str(),
            "4294967395"
        );
    }

    #[test]
    fn test_blank_product_name_rejected() {
        let json = r#"{
            "products": [
                {"id": "a", "name": "  ", "collection": "Silver Mist", "price": 999,
                 "image": "scarf.jpg", "fabric": "Wool", "description": "Warm."}
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::SerializationError(msg)) if msg.contains("has no name")
        ));
    }
}
