//! CLI configuration.

use anyhow::{Context, Result};
use april_storefront::StorefrontConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["april.toml", ".april.toml", "april.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog file to load instead of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Storefront settings.
    #[serde(flatten)]
    pub storefront: StorefrontConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config = Self::parse(path, &content)?;
        config
            .storefront
            .validate()
            .with_context(|| format!("Invalid config file: {}", path))?;
        Ok(config)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_config() {
        let config = CliConfig::parse(
            "april.toml",
            r#"
currency = "INR"
catalog = "catalog.json"

[shipping]
free_threshold = 2500

[timers]
add_delay_ms = 10
"#,
        )
        .unwrap();

        assert_eq!(config.catalog.as_deref(), Some("catalog.json"));
        assert_eq!(config.storefront.shipping.free_threshold, 2500);
        assert_eq!(config.storefront.shipping.flat_rate, 150);
        assert_eq!(config.storefront.timers.add_delay_ms, 10);
        assert_eq!(config.storefront.timers.story_interval_ms, 6000);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = CliConfig::parse("april.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("april.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.storefront.featured.default_size = "S".to_string();
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("april.json");
        std::fs::write(&path, r#"{"timers": {"story_interval_ms": 0}}"#).unwrap();

        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
