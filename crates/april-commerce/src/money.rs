//! Money type for representing prices.
//!
//! Storefront prices are whole currency units (rupees, not paise), so the
//! amount is an integer with no minor-unit scaling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_add(other.amount),
            self.currency,
        ))
    }

    /// Multiply by a scalar, saturating at the numeric bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Multiply by a decimal factor and round to the nearest whole unit.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Format as a display string (e.g., "₹3,499").
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount())
    }

    /// Format the absolute amount with thousands separators (e.g., "3,499").
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount.unsigned_abs())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(3499, Currency::INR).display(), "\u{20b9}3,499");
        assert_eq!(Money::new(150, Currency::INR).display(), "\u{20b9}150");
        assert_eq!(Money::new(1_250_000, Currency::USD).display(), "$1,250,000");
        assert_eq!(Money::new(-150, Currency::INR).display(), "-\u{20b9}150");
        assert_eq!(Money::zero(Currency::INR).display(), "\u{20b9}0");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::INR);
        assert_eq!(m.multiply(2).amount, 2000);
        assert_eq!(Money::new(i64::MAX, Currency::INR).multiply(2).amount, i64::MAX);
    }

    #[test]
    fn test_money_multiply_decimal_rounds() {
        // 4999 * 1.2 = 5998.8
        let m = Money::new(4999, Currency::INR);
        assert_eq!(m.multiply_decimal(1.2).amount, 5999);
    }

    #[test]
    fn test_try_add_rejects_mixed_currencies() {
        let inr = Money::new(100, Currency::INR);
        let usd = Money::new(100, Currency::USD);
        assert_eq!(inr.try_add(&inr).map(|m| m.amount), Some(200));
        assert!(inr.try_add(&usd).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
