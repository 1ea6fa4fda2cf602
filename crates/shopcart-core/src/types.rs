//! # Domain Types
//!
//! Core domain types used throughout shopcart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │    Product      │ add ──►│    CartItem     │                         │
//! │  │  ─────────────  │        │  ─────────────  │                         │
//! │  │  sku (key)      │        │  sku (key)      │                         │
//! │  │  name           │        │  name           │                         │
//! │  │  price_cents    │        │  unit_price     │                         │
//! │  └─────────────────┘        │  quantity (>0)  │                         │
//! │                             └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sku is the only identity: a cart holds at most one line per sku.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - the business identifier.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            price_cents: price.cents(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the cart: a product snapshot plus its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub sku: String,
    pub name: String,
    /// Unit price in cents at the time the line was added.
    pub unit_price_cents: i64,
    /// Always at least 1 inside a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a line with quantity 1.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        CartItem {
            sku: sku.into(),
            name: name.into(),
            unit_price_cents: unit_price.cents(),
            quantity: 1,
        }
    }

    /// Freezes a catalog product into a cart line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem::new(product.sku.clone(), product.name.clone(), product.price())
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// unit price × quantity
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Sort key used to order cart lines for display.
    #[inline]
    pub fn display_key(&self) -> u32 {
        display_key(&self.sku)
    }
}

// =============================================================================
// Display Ordering
// =============================================================================

/// Numeric key from the trailing digits of a sku, looking at no more than the
/// last four characters.
///
/// Skus without trailing digits map to 0.
///
/// ```rust
/// use shopcart_core::display_key;
///
/// assert_eq!(display_key("item0002"), 2);
/// assert_eq!(display_key("WIDGET-1042"), 1042);
/// assert_eq!(display_key("SKU12345"), 2345);
/// assert_eq!(display_key("GIFTCARD"), 0);
/// ```
pub fn display_key(sku: &str) -> u32 {
    sku.chars()
        .rev()
        .take(4)
        .map_while(|c| c.to_digit(10))
        .fold((0, 1), |(key, place), digit| (key + digit * place, place * 10))
        .0
}

// =============================================================================
// Unit Tests
// =============================================================================
