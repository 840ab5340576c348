//! Shopping cart module.
//!
//! Contains the cart aggregate, line items and the bag summary.

mod cart;
mod line;
mod pricing;

pub use cart::{Cart, CartData, MAX_QUANTITY_PER_LINE};
pub use line::{LineItem, LineKey, ProductSnapshot};
pub use pricing::{CartSummary, ShippingPolicy};
