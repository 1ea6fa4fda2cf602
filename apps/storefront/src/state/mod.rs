//! # State Module
//!
//! Application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Each command and view takes exactly the state it needs as a parameter,
//! instead of reaching into an ambient context.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │  CartStore   │  │  CatalogState    │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Arc<Mutex<  │  │  Arc<Catalog>    │  │  store_name      │          │
//! │  │    Cart      │  │  (read-only)     │  │  catalog_path    │          │
//! │  │  >>          │  │                  │  │  quantity_options│          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • CartStore: swapped whole on every dispatch                          │
//! │  • CatalogState / ConfigState: read-only after startup                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartStore;
pub use catalog::{CatalogLoadError, CatalogState};
pub use config::{ConfigError, ConfigState};
