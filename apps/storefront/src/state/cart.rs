//! # Cart Store
//!
//! Holds the current cart and is the only place a new cart is swapped in.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View Event            Command                 CartStore                │
//! │  ──────────            ───────                 ─────────                │
//! │                                                                         │
//! │  Add to cart ────────► add_to_cart() ────────► dispatch(Add)           │
//! │  Pick quantity ──────► update_cart_item() ───► dispatch(SetQuantity)   │
//! │  Click X ────────────► remove_from_cart() ───► dispatch(Remove)        │
//! │  Place Order ────────► submit_order() ───────► dispatch(Submit)        │
//! │                                                                         │
//! │  dispatch: lock ─► next = transition(&cart, action)? ─► swap ─► unlock │
//! │  A rejected action leaves the stored cart untouched.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CartStore` is a cheap handle: cloning it shares the same cart, which is
//! how the storefront hands it to each view instead of exposing a global.

use std::sync::{Arc, Mutex, MutexGuard};

use shopcart_core::{Action, Cart, CoreResult};
use tracing::debug;

/// Shared handle to the current cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        CartStore::default()
    }

    /// The stored cart is only ever replaced whole by a value `transition`
    /// already produced, so a poisoned lock still guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront::state::CartStore;
    ///
    /// let store = CartStore::new();
    /// let totals = store.with_cart(|cart| cart.totals());
    /// assert_eq!(totals.total_items, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// A copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }

    /// Applies an action and stores the resulting cart.
    ///
    /// Returns the new cart on success. On error the stored cart is unchanged.
    pub fn dispatch(&self, action: Action) -> CoreResult<Cart> {
        let kind = action.kind();
        let sku = action.sku().map(str::to_string);

        let mut cart = self.lock();
        let next = cart.apply(action)?;
        *cart = next.clone();

        debug!(
            action = %kind,
            sku = sku.as_deref().unwrap_or("-"),
            lines = next.len(),
            total_items = next.total_items(),
            "cart updated"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::{CartItem, CoreError, Money};

    fn widget() -> CartItem {
        CartItem::new("item0001", "Widget", Money::from_cents(999))
    }

    #[test]
    fn test_dispatch_updates_shared_cart() {
        let store = CartStore::new();
        let handle = store.clone();

        store.dispatch(Action::Add(widget())).unwrap();
        store.dispatch(Action::Add(widget())).unwrap();

        // Clones observe the same cart
        assert_eq!(handle.with_cart(|c| c.total_items()), 2);
        assert_eq!(handle.snapshot().total_price().cents(), 1998);
    }

    #[test]
    fn test_rejected_action_keeps_cart() {
        let store = CartStore::new();
        store.dispatch(Action::Add(widget())).unwrap();
        let before = store.snapshot();

        let err = store
            .dispatch(Action::SetQuantity("item0404".to_string(), 3))
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownSku("item0404".to_string()));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_submit_resets() {
        let store = CartStore::new();
        store.dispatch(Action::Add(widget())).unwrap();
        let cart = store.dispatch(Action::Submit).unwrap();
        assert!(cart.is_empty());
        assert!(store.snapshot().is_empty());
    }
}
