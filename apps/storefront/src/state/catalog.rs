//! # Catalog State
//!
//! Wrapper around the product catalog for injection into commands and views.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shopcart_core::{Catalog, CoreError};
use tracing::info;

/// Catalog state shared by commands and views.
///
/// The catalog is immutable, so the handle is a plain `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

/// Why a catalog file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid catalog {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Reads the JSON catalog at `path`, or the demo catalog when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        let Some(path) = path else {
            info!("Using built-in demo catalog");
            return Ok(CatalogState::default());
        };

        let json = fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_json(&json).map_err(|source| CatalogLoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(CatalogState::new(catalog))
    }

    /// Returns a reference to the inner catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}
