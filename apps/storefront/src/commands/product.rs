//! # Product Commands
//!
//! Read-only product listing for the product page.

use serde::{Deserialize, Serialize};
use shopcart_core::{Cart, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, CatalogState};

/// A product as the product page shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub sku: String,
    pub name: String,
    pub price_cents: i64,
    /// en-US currency string
    pub price: String,
    /// Whether the cart already holds this sku
    pub in_cart: bool,
}

impl ProductListing {
    pub fn new(product: &Product, cart: &Cart) -> Self {
        ProductListing {
            sku: product.sku.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            price: product.price().to_string(),
            in_cart: cart.contains(&product.sku),
        }
    }
}

/// Lists the catalog in catalog order, flagging products already in the cart.
pub fn list_products(catalog: &CatalogState, cart: &CartStore) -> Vec<ProductListing> {
    debug!("list_products command");

    cart.with_cart(|c| {
        catalog
            .inner()
            .products()
            .iter()
            .map(|p| ProductListing::new(p, c))
            .collect()
    })
}

/// Gets a single product by SKU.
pub fn get_product(
    catalog: &CatalogState,
    cart: &CartStore,
    sku: &str,
) -> Result<ProductListing, ApiError> {
    debug!(sku = %sku, "get_product command");

    let product = catalog.inner().require(sku)?;
    Ok(cart.with_cart(|c| ProductListing::new(product, c)))
}
