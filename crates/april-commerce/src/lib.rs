//! Catalog, cart and pricing types for the APRIL storefront.
//!
//! This crate has no framework dependencies. It provides:
//!
//! - **Catalog**: the static, read-only set of products and curated collections
//! - **Cart**: the line-item aggregate with totals derived on read
//! - **Pricing**: the cart summary shown in the bag (subtotal, shipping, total)
//!
//! # Example
//!
//! ```rust
//! use april_commerce::prelude::*;
//!
//! let catalog = Catalog::april();
//! let dress = catalog.featured().expect("built-in catalog is not empty");
//!
//! let mut cart = Cart::new();
//! let key = cart.add_item(&dress.snapshot_with_size("M")).unwrap();
//! cart.add_item(&dress.snapshot_with_size("M")).unwrap();
//!
//! assert_eq!(cart.get(&key).map(|line| line.quantity), Some(2));
//! assert_eq!(cart.total().amount, dress.price * 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use cart::{
    Cart, CartData, CartSummary, LineItem, LineKey, ProductSnapshot, ShippingPolicy,
    MAX_QUANTITY_PER_LINE,
};
pub use catalog::{Catalog, CatalogData, Collection, Product};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogData, Collection, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartData, CartSummary, LineItem, LineKey, ProductSnapshot, ShippingPolicy,
        MAX_QUANTITY_PER_LINE,
    };
}
