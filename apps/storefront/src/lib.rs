//! # Storefront Library
//!
//! Text front end for the shopping cart. Loads configuration and the product
//! catalog, owns the cart store, and drives the views from a line shell.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── app.rs          ◄─── Storefront root: page, navigation, render
//! ├── shell.rs        ◄─── stdin command loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart store (reducer owner)
//! │   ├── catalog.rs  ◄─── Product catalog
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product listing commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── config.rs   ◄─── Config command
//! ├── views/          ◄─── Header, Nav, ProductList, CartPage, Footer
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Handling
//! There is no global cart. The [`state::CartStore`] is created once at
//! startup and handed to every view and command that reads or changes it:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐    │
//! │  │    CartStore     │ │   CatalogState   │ │    ConfigState       │    │
//! │  │                  │ │                  │ │                      │    │
//! │  │  • Current cart  │ │  • Products      │ │  • Store name        │    │
//! │  │  • dispatch()    │ │  • Lookup by sku │ │  • Catalog path      │    │
//! │  │                  │ │                  │ │  • Quantity options  │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod views;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use app::Storefront;
use state::{CartStore, CatalogState, ConfigState};

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • SHOPCART_* environment variables                                  │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • JSON file from SHOPCART_CATALOG_PATH, or the demo catalog         │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Empty cart store, product page first                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting storefront");

    let config = ConfigState::load()?;
    let catalog = CatalogState::load(config.catalog_path.as_deref())?;
    info!(store = %config.store_name, products = catalog.inner().len(), "State initialized");

    let mut app = Storefront::new(config, catalog, CartStore::new());
    shell::run(&mut app, io::stdin().lock(), io::stdout().lock())?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the rendered screen.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched action
/// - `RUST_LOG=storefront=info` - Startup and order messages
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
