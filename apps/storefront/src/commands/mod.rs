//! # Commands Module
//!
//! Every operation a view can request.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product listing
//! ├── cart.rs     ◄─── Cart manipulation
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartStore, sku: &str)
//! ```

pub mod cart;
pub mod config;
pub mod product;
