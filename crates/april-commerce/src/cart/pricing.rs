//! Bag summary and shipping rules.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat-rate shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold: i64,
    /// Shipping charged below the threshold.
    #[serde(default = "default_flat_rate")]
    pub flat_rate: i64,
}

fn default_free_threshold() -> i64 {
    2000
}

fn default_flat_rate() -> i64 {
    150
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: default_free_threshold(),
            flat_rate: default_flat_rate(),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged for a subtotal. An empty bag ships nothing.
    pub fn shipping_for(&self, subtotal: i64) -> i64 {
        if subtotal <= 0 || subtotal >= self.free_threshold {
            0
        } else {
            self.flat_rate
        }
    }

    /// How much more must be spent to reach free shipping.
    pub fn free_shipping_remaining(&self, subtotal: i64) -> i64 {
        (self.free_threshold - subtotal).max(0)
    }
}

/// What the bag footer shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: u64,
}

impl CartSummary {
    /// Summarize a cart under a shipping policy.
    pub fn for_cart(cart: &Cart, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.total();
        let shipping = Money::new(policy.shipping_for(subtotal.amount), subtotal.currency);
        let total = Money::new(subtotal.amount.saturating_add(shipping.amount), subtotal.currency);

        Self {
            subtotal,
            shipping,
            total,
            line_count: cart.unique_line_count(),
            item_count: cart.item_count(),
        }
    }

    /// Whether shipping is free for this bag.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
