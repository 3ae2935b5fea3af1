//! # Configuration State
//!
//! Counter configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PANADERIA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use panaderia_core::{Catalog, CatalogParseError, ReceiptConfig};

/// Environment variable naming a JSON catalog file.
pub const ENV_CATALOG: &str = "PANADERIA_CATALOG";
/// Environment variable overriding the vendor line on receipts.
pub const ENV_STORE_NAME: &str = "PANADERIA_STORE_NAME";
/// Environment variable overriding the currency suffix.
pub const ENV_CURRENCY_SYMBOL: &str = "PANADERIA_CURRENCY_SYMBOL";

/// Counter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    /// Store name (printed on receipts)
    pub store_name: String,

    /// Currency symbol appended to amounts
    pub currency_symbol: String,

    /// JSON catalog file; the built-in menu when absent
    pub catalog_path: Option<PathBuf>,
}

impl Default for CounterConfig {
    /// Defaults match the built-in receipt texts and menu.
    fn default() -> Self {
        let receipt = ReceiptConfig::default();

        CounterConfig {
            store_name: receipt.vendor_name,
            currency_symbol: receipt.currency_symbol,
            catalog_path: None,
        }
    }
}

impl CounterConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PANADERIA_STORE_NAME`: Override store name
    /// - `PANADERIA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PANADERIA_CATALOG`: Path to a JSON catalog
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CounterConfig::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME).filter(|s| !s.trim().is_empty()) {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL).filter(|s| !s.trim().is_empty()) {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup(ENV_CATALOG).filter(|s| !s.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Receipt texts for this store.
    pub fn receipt_config(&self) -> ReceiptConfig {
        ReceiptConfig {
            vendor_name: self.store_name.clone(),
            currency_symbol: self.currency_symbol.clone(),
            ..ReceiptConfig::default()
        }
    }

    /// Loads the catalog file if one is configured, else the built-in menu.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = read_catalog(path)?;
                info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
                Ok(catalog)
            }
            None => Ok(Catalog::default()),
        }
    }
}

fn read_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Catalog::from_json(&json).map_err(|source| ConfigError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CounterConfig::from_lookup(|_| None);
        assert_eq!(config, CounterConfig::default());
        assert_eq!(config.store_name, "Panaderia Sánchez S.A");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.load_catalog().unwrap(), Catalog::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = CounterConfig::from_lookup(lookup_from(&[
            (ENV_STORE_NAME, "Horno del Barrio"),
            (ENV_CURRENCY_SYMBOL, "EUR"),
            (ENV_CATALOG, "/tmp/menu.json"),
        ]));

        assert_eq!(config.store_name, "Horno del Barrio");
        assert_eq!(config.currency_symbol, "EUR");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/menu.json")));

        let receipt = config.receipt_config();
        assert_eq!(receipt.vendor_name, "Horno del Barrio");
        assert_eq!(receipt.title, ReceiptConfig::default().title);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = CounterConfig::from_lookup(lookup_from(&[(ENV_STORE_NAME, "  ")]));
        assert_eq!(config.store_name, CounterConfig::default().store_name);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("panaderia-catalog-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"name": "Magdalena", "unitPriceCents": 30}, {"name": "Ensaimada", "unitPriceCents": 150}]"#,
        )
        .unwrap();

        let config = CounterConfig {
            catalog_path: Some(path.clone()),
            ..CounterConfig::default()
        };
        let catalog = config.load_catalog().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "Magdalena");
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = CounterConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/panaderia/catalog.json")),
            ..CounterConfig::default()
        };
        assert!(matches!(config.load_catalog(), Err(ConfigError::Read { .. })));
    }
}
