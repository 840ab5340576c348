//! The cart aggregate.

use crate::cart::{CartSummary, LineItem, LineKey, ProductSnapshot, ShippingPolicy};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// A shopping cart.
///
/// Lines keep first-insertion order. Item count and total are derived from
/// the lines on every read; there is no stored total to drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartData")]
pub struct Cart {
    items: Vec<LineItem>,
    is_open: bool,
    currency: Currency,
}

/// Raw cart contents as read from a saved session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartData {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub currency: Currency,
}

impl TryFrom<CartData> for Cart {
    type Error = CommerceError;

    /// Rejects lines outside `1..=MAX_QUANTITY_PER_LINE`, repeated keys and
    /// lines that would not pass as a product snapshot.
    fn try_from(data: CartData) -> Result<Self, Self::Error> {
        let mut keys = HashSet::new();
        for item in &data.items {
            if item.quantity == 0 {
                return Err(CommerceError::InvalidProduct(format!(
                    "line {} has quantity 0",
                    item.key()
                )));
            }
            if item.quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    item.quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            item.snapshot().validate()?;
            if !keys.insert(item.key()) {
                return Err(CommerceError::DuplicateProduct(item.key().to_string()));
            }
        }

        Ok(Self {
            items: data.items,
            is_open: data.is_open,
            currency: data.currency,
        })
    }
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart priced in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line with the same key gains one unit and keeps the price,
    /// name and image captured when it was first added. Otherwise a new line
    /// with quantity 1 is appended.
    ///
    /// Returns an error if:
    /// - the snapshot fails validation (blank id or name, negative price)
    /// - the line is already at [`MAX_QUANTITY_PER_LINE`]
    pub fn add_item(&mut self, product: &ProductSnapshot) -> Result<LineKey, CommerceError> {
        product.validate()?;
        let key = product.key();

        if let Some(existing) = self.items.iter_mut().find(|i| i.matches(&key)) {
            if existing.quantity >= MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    existing.quantity.saturating_add(1),
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity += 1;
            return Ok(key);
        }

        self.items.push(LineItem::from_snapshot(product));
        Ok(key)
    }

    /// Remove a line regardless of its quantity.
    ///
    /// Returns whether a line was removed; an absent key is a no-op.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| !i.matches(key));
        self.items.len() < len_before
    }

    /// Adjust a line's quantity by `delta`.
    ///
    /// The result is clamped to `0..=MAX_QUANTITY_PER_LINE`; reaching 0 drops
    /// the line. Returns the new quantity, or `None` if no line has the key.
    pub fn update_quantity(&mut self, key: &LineKey, delta: i64) -> Option<u32> {
        let index = self.items.iter().position(|i| i.matches(key))?;
        let current = i64::from(self.items[index].quantity);
        let next = current
            .saturating_add(delta)
            .clamp(0, i64::from(MAX_QUANTITY_PER_LINE)) as u32;

        if next == 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = next;
        }
        Some(next)
    }

    /// Remove every line. Returns how many lines were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Show or hide the cart panel.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Flip the cart panel's visibility. Returns the new state.
    pub fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Whether the cart panel is visible.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Lines in first-insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(key))
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Money {
        let amount = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total()));
        Money::new(amount, self.currency)
    }

    /// Bag summary with shipping applied.
    pub fn summary(&self, policy: &ShippingPolicy) -> CartSummary {
        CartSummary::for_cart(self, policy)
    }
}
