//! Storefront configuration.

use std::time::Duration;

use april_commerce::{Currency, ShippingPolicy};
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Storefront configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Currency prices are shown in.
    #[serde(default)]
    pub currency: Currency,

    /// Shipping rules for the bag summary.
    #[serde(default)]
    pub shipping: ShippingPolicy,

    /// Timer durations.
    #[serde(default)]
    pub timers: TimerConfig,

    /// Featured product settings.
    #[serde(default)]
    pub featured: FeaturedConfig,
}

impl StorefrontConfig {
    /// Reject values the storefront cannot run with.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.timers.story_interval_ms == 0 {
            return Err(StorefrontError::Config(
                "timers.story_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.shipping.flat_rate < 0 || self.shipping.free_threshold < 0 {
            return Err(StorefrontError::Config(
                "shipping amounts must not be negative".to_string(),
            ));
        }
        if self.featured.default_size.trim().is_empty() {
            return Err(StorefrontError::Config(
                "featured.default_size must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Timer durations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Simulated delay before the featured product lands in the bag.
    #[serde(default = "default_add_delay")]
    pub add_delay_ms: u64,

    /// How long the "added" confirmation stays up.
    #[serde(default = "default_confirm_delay")]
    pub confirm_delay_ms: u64,

    /// Brand-story carousel auto-advance period.
    #[serde(default = "default_story_interval")]
    pub story_interval_ms: u64,
}

fn default_add_delay() -> u64 {
    1200
}

fn default_confirm_delay() -> u64 {
    3000
}

fn default_story_interval() -> u64 {
    6000
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            add_delay_ms: default_add_delay(),
            confirm_delay_ms: default_confirm_delay(),
            story_interval_ms: default_story_interval(),
        }
    }
}

impl TimerConfig {
    pub fn add_delay(&self) -> Duration {
        Duration::from_millis(self.add_delay_ms)
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }

    pub fn story_interval(&self) -> Duration {
        Duration::from_millis(self.story_interval_ms)
    }
}

/// Featured product settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedConfig {
    /// Size preselected on the featured product.
    #[serde(default = "default_size")]
    pub default_size: String,
}

fn default_size() -> String {
    "M".to_string()
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.currency, Currency::INR);
        assert_eq!(config.shipping.free_threshold, 2000);
        assert_eq!(config.shipping.flat_rate, 150);
        assert_eq!(config.timers.add_delay(), Duration::from_millis(1200));
        assert_eq!(config.timers.confirm_delay(), Duration::from_millis(3000));
        assert_eq!(config.timers.story_interval(), Duration::from_secs(6));
        assert_eq!(config.featured.default_size, "M");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"timers": {"add_delay_ms": 10}, "currency": "USD"}"#).unwrap();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.timers.add_delay_ms, 10);
        assert_eq!(config.timers.confirm_delay_ms, 3000);
        assert_eq!(config.shipping, ShippingPolicy::default());
    }

    #[test]
    fn test_zero_story_interval_rejected() {
        let mut config = StorefrontConfig::default();
        config.timers.story_interval_ms = 0;
        assert!(matches!(config.validate(), Err(StorefrontError::Config(_))));
    }
}
