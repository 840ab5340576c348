//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use april_commerce::Catalog;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Path the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Catalog the session shops from.
    pub catalog: Catalog,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load config and catalog.
    ///
    /// An explicit `--catalog` wins over the config's `catalog` entry; with
    /// neither, the built-in APRIL catalog is used.
    pub fn load(config_path: Option<&str>, catalog_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let catalog = match catalog_path.or(config.catalog.as_deref()) {
            Some(path) => load_catalog(&resolve_path(&cwd, path))?,
            None => Catalog::april(),
        };

        if catalog.currency() != config.storefront.currency {
            output.warn(&format!(
                "Catalog is priced in {} but the config says {}",
                catalog.currency().code(),
                config.storefront.currency.code()
            ));
        }

        Ok(Self {
            config,
            config_path,
            catalog,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

/// Read a catalog from JSON or TOML, chosen by extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))
    } else {
        Catalog::from_json(&content)
            .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_CATALOG: &str = r#"
currency = "INR"

[[products]]
id = "tee"
name = "Linen Tee"
collection = "Basics"
price = 999
image = "/images/tee.jpg"
fabric = "Linen"
description = "A plain tee."
sizes = ["S", "M"]
"#;

    #[test]
    fn test_load_toml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, TOML_CATALOG).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.featured().unwrap().name, "Linen Tee");
    }

    #[test]
    fn test_load_catalog_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let doubled = format!("{}\n{}", TOML_CATALOG, &TOML_CATALOG[TOML_CATALOG.find("[[products]]").unwrap()..]);
        std::fs::write(&path, doubled).unwrap();

        assert!(load_catalog(&path).is_err());
    }

    #[test]
    fn test_missing_catalog_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
