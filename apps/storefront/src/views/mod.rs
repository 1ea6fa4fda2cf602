//! # Views
//!
//! Text components for the storefront. Each component is a plain struct
//! built from the data it shows and rendered through `Display`; none of
//! them reach for shared state on their own.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Header (store name, totals, Nav)                                       │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Page::Products ──► ProductList ──► ProductCard × n                     │
//! │  Page::Cart     ──► CartPage    ──► CartLineItem × n, totals, order     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Footer (totals on the product page, copyright)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod footer;
mod header;
mod nav;
mod product;

pub use cart::{quantity_options, CartLineItem, CartPage};
pub use footer::Footer;
pub use header::Header;
pub use nav::Nav;
pub use product::{ProductCard, ProductList};

use serde::{Deserialize, Serialize};

/// Which page the storefront is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Products,
    Cart,
}

impl Page {
    /// The other page.
    pub fn toggled(self) -> Self {
        match self {
            Page::Products => Page::Cart,
            Page::Cart => Page::Products,
        }
    }
}
