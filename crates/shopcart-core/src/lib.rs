//! # shopcart-core: Pure Cart Logic
//!
//! This crate is the **heart** of shopcart. It holds the cart state, the
//! transitions that change it, and the totals derived from it, all as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (apps/storefront)                 │   │
//! │  │    Header ──► ProductList ──► Cart ──► Footer                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(Action)                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  action   │  │   cart    │  │   money   │  │  catalog  │  │   │
//! │  │   │  Action   │  │   Cart    │  │   Money   │  │  Catalog  │  │   │
//! │  │   │ RawAction │  │transition │  │  Display  │  │  Product  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, Sku ordering)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`action`] - The closed set of cart transitions and their wire form
//! - [`cart`] - Cart state, the transition function and derived totals
//! - [`catalog`] - The read-only product catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Action, Cart, CartItem, Money};
//!
//! let item = CartItem::new("A0001", "X", Money::from_cents(1000));
//!
//! let cart = Cart::new()
//!     .apply(Action::Add(item.clone()))
//!     .unwrap()
//!     .apply(Action::Add(item))
//!     .unwrap();
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().to_string(), "$20.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::{Action, ActionKind, ActionPayload, RawAction};
pub use cart::{transition, Cart, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{display_key, CartItem, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest unit price accepted, in cents ($1,000,000.00).
///
/// A full line (`MAX_ITEM_QUANTITY` units) stays below 10^11 cents, far from
/// the `i64` limit. Cart totals are still checked on every transition.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Number of entries the quantity selector offers by default.
///
/// A line whose quantity is already higher extends the selector up to it.
pub const DEFAULT_QUANTITY_OPTIONS: u32 = 20;
