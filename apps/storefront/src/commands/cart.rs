//! # Cart Commands
//!
//! Commands the views call to change or read the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │                        │
//! │  │  Cart    │     │          │     │  Placed  │                        │
//! │  └──────────┘     └──────────┘     └────┬─────┘                        │
//! │       ▲                │                │                               │
//! │       │           add_to_cart           │ submit_order                  │
//! │       │           update_cart_item      │                               │
//! │       │           remove_from_cart      │                               │
//! │       └─────────────────────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use shopcart_core::{Action, Cart, CartItem, CartTotals, RawAction};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, CatalogState};

/// Cart response including lines (display order) and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity + 1
/// - Product not in cart: added with quantity 1 at the catalog price
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    sku: &str,
) -> Result<CartResponse, ApiError> {
    debug!(sku = %sku, "add_to_cart command");

    let product = catalog.inner().require(sku)?;
    let next = cart.dispatch(Action::Add(CartItem::from_product(product)))?;
    Ok(CartResponse::from(&next))
}

/// Replaces the quantity of a line already in the cart.
pub fn update_cart_item(
    cart: &CartStore,
    sku: &str,
    quantity: u32,
) -> Result<CartResponse, ApiError> {
    debug!(sku = %sku, quantity = %quantity, "update_cart_item command");

    let next = cart.dispatch(Action::SetQuantity(sku.to_string(), quantity))?;
    Ok(CartResponse::from(&next))
}

/// Removes a line from the cart. Removing an absent sku is not an error.
pub fn remove_from_cart(cart: &CartStore, sku: &str) -> Result<CartResponse, ApiError> {
    debug!(sku = %sku, "remove_from_cart command");

    let next = cart.dispatch(Action::Remove(sku.to_string()))?;
    Ok(CartResponse::from(&next))
}

/// Places the order, which empties the cart.
///
/// ## Returns
/// The cart as it was at submission, so the caller can confirm what was
/// ordered.
pub fn submit_order(cart: &CartStore) -> Result<CartResponse, ApiError> {
    debug!("submit_order command");

    let ordered = cart.snapshot();
    cart.dispatch(Action::Submit)?;
    Ok(CartResponse::from(&ordered))
}

/// Dispatches an action in its JSON wire form.
///
/// ```json
/// {"type": "QUANTITY", "payload": {"sku": "item0002", "quantity": 3}}
/// ```
pub fn dispatch_json(cart: &CartStore, json: &str) -> Result<CartResponse, ApiError> {
    debug!(json = %json, "dispatch_json command");

    let raw = RawAction::from_json(json)?;
    let action = Action::try_from(raw)?;
    let next = cart.dispatch(action)?;
    Ok(CartResponse::from(&next))
}
