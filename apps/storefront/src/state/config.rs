//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPCART_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shopcart_core::DEFAULT_QUANTITY_OPTIONS;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header
    pub store_name: String,

    /// JSON catalog file; the built-in demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Entries in a cart line's quantity selector
    pub quantity_options: u32,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Acme Co.".to_string(),
            catalog_path: None,
            quantity_options: DEFAULT_QUANTITY_OPTIONS,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `SHOPCART_STORE_NAME`: Override store name
    /// - `SHOPCART_CATALOG_PATH`: Path to a JSON catalog file
    /// - `SHOPCART_QUANTITY_OPTIONS`: Quantity selector size (positive integer)
    pub fn load() -> Result<Self, ConfigError> {
        ConfigState::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SHOPCART_STORE_NAME") {
            if store_name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("SHOPCART_STORE_NAME".to_string()));
            }
            config.store_name = store_name;
        }

        config.catalog_path = lookup("SHOPCART_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(options) = lookup("SHOPCART_QUANTITY_OPTIONS") {
            config.quantity_options = options
                .trim()
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue("SHOPCART_QUANTITY_OPTIONS".to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.store_name, "Acme Co.");
        assert_eq!(config.quantity_options, 20);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHOPCART_STORE_NAME", "Widget World"),
            ("SHOPCART_CATALOG_PATH", "/tmp/catalog.json"),
            ("SHOPCART_QUANTITY_OPTIONS", " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Widget World");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.quantity_options, 10);
    }

    #[test]
    fn test_invalid_values() {
        for bad in ["0", "-3", "many"] {
            let err = ConfigState::from_lookup(lookup(&[("SHOPCART_QUANTITY_OPTIONS", bad)]))
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for SHOPCART_QUANTITY_OPTIONS");
        }

        assert!(ConfigState::from_lookup(lookup(&[("SHOPCART_STORE_NAME", " ")])).is_err());
    }
}
