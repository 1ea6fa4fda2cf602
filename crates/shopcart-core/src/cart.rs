//! # Cart
//!
//! The cart state and the one function allowed to change it.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    transition(&Cart, Action) -> Cart'                   │
//! │                                                                         │
//! │  Add(item)            sku present? ── yes ──► quantity + 1              │
//! │                                    └─ no ───► insert, quantity 1        │
//! │                                                                         │
//! │  Remove(sku)          drop the line (absent sku: unchanged)             │
//! │                                                                         │
//! │  SetQuantity(sku, n)  sku present? ── yes ──► quantity = n              │
//! │                                    └─ no ───► UnknownSku                │
//! │                                                                         │
//! │  Submit               empty cart                                        │
//! │                                                                         │
//! │  The input cart is never touched; every call returns a new value.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per sku
//! - Every quantity is in `1..=MAX_ITEM_QUANTITY`
//! - The total price fits in a `Money` value, so the derived totals never
//!   overflow
//! - Lines are kept sorted by [`display_key`](crate::types::display_key),
//!   ties in insertion order, so `items()` is already the display order

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::action::Action;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartItem;
use crate::validation::{validate_price_cents, validate_product_name, validate_quantity, validate_sku};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered set of lines keyed by sku.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Applies an action, returning the next cart.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Action, Cart, CartItem, Money};
    ///
    /// let cart = Cart::new()
    ///     .apply(Action::Add(CartItem::new("A0001", "X", Money::from_cents(1000))))
    ///     .unwrap();
    /// let cart = cart.apply(Action::Remove("A0001".to_string())).unwrap();
    /// assert!(cart.is_empty());
    /// ```
    pub fn apply(&self, action: Action) -> CoreResult<Cart> {
        transition(self, action)
    }

    /// Lines in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, sku: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.get(sku).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Derived Totals
    // =========================================================================

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total price, or `None` if any line or the sum overflows.
    fn checked_total_price(&self) -> Option<Money> {
        self.items.iter().try_fold(Money::zero(), |total, item| {
            item.unit_price()
                .checked_multiply_quantity(item.quantity)
                .and_then(|line| total.checked_add(line))
        })
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    fn position(&self, sku: &str) -> Option<usize> {
        self.items.iter().position(|item| item.sku == sku)
    }

    /// Inserts after every line whose key is not greater, keeping the sort
    /// stable with respect to insertion order.
    fn insert_sorted(&mut self, item: CartItem) {
        let key = item.display_key();
        let at = self.items.partition_point(|line| line.display_key() <= key);
        self.items.insert(at, item);
    }
}

// =============================================================================
// Transition Function
// =============================================================================

/// Computes the cart that results from applying `action` to `state`.
///
/// Pure: `state` is only read, and the same inputs always give the same
/// output. A cart whose total price would overflow is rejected with
/// [`CoreError::TotalTooLarge`].
pub fn transition(state: &Cart, action: Action) -> CoreResult<Cart> {
    let next = next_cart(state, action)?;
    if next.checked_total_price().is_none() {
        return Err(CoreError::TotalTooLarge);
    }
    Ok(next)
}

fn next_cart(state: &Cart, action: Action) -> CoreResult<Cart> {
    match action {
        Action::Add(item) => {
            validate_sku(&item.sku)?;
            validate_product_name(&item.name)?;
            validate_price_cents(item.unit_price_cents)?;

            let mut next = state.clone();
            match next.position(&item.sku) {
                Some(index) => {
                    let line = &mut next.items[index];
                    let quantity = line.quantity + 1;
                    if quantity > MAX_ITEM_QUANTITY {
                        return Err(CoreError::QuantityTooLarge {
                            requested: u64::from(quantity),
                            max: MAX_ITEM_QUANTITY,
                        });
                    }
                    // The newest snapshot of name and price wins.
                    line.name = item.name;
                    line.unit_price_cents = item.unit_price_cents;
                    line.quantity = quantity;
                }
                None => next.insert_sorted(CartItem { quantity: 1, ..item }),
            }
            Ok(next)
        }

        Action::Remove(sku) => {
            let mut next = state.clone();
            next.items.retain(|item| item.sku != sku);
            Ok(next)
        }

        Action::SetQuantity(sku, quantity) => {
            let index = state
                .position(&sku)
                .ok_or_else(|| CoreError::UnknownSku(sku.clone()))?;
            validate_quantity(quantity)?;

            let mut next = state.clone();
            next.items[index].quantity = quantity;
            Ok(next)
        }

        Action::Submit => Ok(Cart::new()),
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals summary for views and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub total_items: u64,
    pub total_price_cents: i64,
    /// en-US currency string, e.g. `$1,234.50`
    pub total_price: String,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let price = cart.total_price();
        CartTotals {
            total_items: cart.total_items(),
            total_price_cents: price.cents(),
            total_price: price.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::MAX_PRICE_CENTS;
    use proptest::prelude::*;

    fn item(sku: &str, cents: i64) -> CartItem {
        CartItem::new(sku, format!("Product {}", sku), Money::from_cents(cents))
    }

    fn add(sku: &str, cents: i64) -> Action {
        Action::Add(item(sku, cents))
    }

    fn skus(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|i| i.sku.as_str()).collect()
    }

    #[test]
    fn test_add_twice_increments_quantity() {
        let cart = Cart::new()
            .apply(add("A0001", 1000))
            .unwrap()
            .apply(add("A0001", 1000))
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("A0001").unwrap().quantity, 2);
        assert_eq!(cart.get("A0001").unwrap().unit_price(), Money::from_cents(1000));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().to_string(), "$20.00");
    }

    #[test]
    fn test_remove_clears_totals() {
        let cart = Cart::new()
            .apply(add("A0001", 1000))
            .unwrap()
            .apply(add("A0001", 1000))
            .unwrap()
            .apply(Action::Remove("A0001".to_string()))
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().to_string(), "$0.00");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cart = Cart::new().apply(add("A0001", 1000)).unwrap();
        let after = cart.apply(Action::Remove("B0002".to_string())).unwrap();
        assert_eq!(after, cart);
    }

    #[test]
    fn test_set_quantity() {
        let cart = Cart::new()
            .apply(add("item0002", 1999))
            .unwrap()
            .apply(Action::SetQuantity("item0002".to_string(), 5))
            .unwrap();

        assert_eq!(cart.get("item0002").unwrap().quantity, 5);
        assert_eq!(cart.total_price().cents(), 9995);
    }

    #[test]
    fn test_set_quantity_unknown_sku() {
        let err = Cart::new()
            .apply(Action::SetQuantity("item0009".to_string(), 2))
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownSku("item0009".to_string()));
    }

    #[test]
    fn test_set_quantity_rejects_zero_and_too_large() {
        let cart = Cart::new().apply(add("item0001", 999)).unwrap();

        let err = cart
            .apply(Action::SetQuantity("item0001".to_string(), 0))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        let err = cart
            .apply(Action::SetQuantity("item0001".to_string(), MAX_ITEM_QUANTITY + 1))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_add_past_max_quantity() {
        let cart = Cart::new()
            .apply(add("item0001", 999))
            .unwrap()
            .apply(Action::SetQuantity("item0001".to_string(), MAX_ITEM_QUANTITY))
            .unwrap();

        let err = cart.apply(add("item0001", 999)).unwrap_err();
        assert_eq!(
            err,
            CoreError::QuantityTooLarge {
                requested: 1000,
                max: MAX_ITEM_QUANTITY
            }
        );
    }

    #[test]
    fn test_add_rejects_invalid_item() {
        let err = Cart::new().apply(add("", 100)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));

        let err = Cart::new().apply(add("A0001", -1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_add_rejects_price_above_bound() {
        let cart = Cart::new().apply(add("A0001", 1000)).unwrap();

        for cents in [MAX_PRICE_CENTS + 1, i64::MAX] {
            let err = cart.apply(add("B0002", cents)).unwrap_err();
            assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
        }
        // A valid line cannot be repriced past the bound either
        let err = cart.apply(add("A0001", i64::MAX)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
        assert_eq!(cart.get("A0001").unwrap().unit_price_cents, 1000);
    }

    #[test]
    fn test_max_price_at_max_quantity() {
        let cart = Cart::new()
            .apply(add("A0001", MAX_PRICE_CENTS))
            .unwrap()
            .apply(add("A0001", MAX_PRICE_CENTS))
            .unwrap()
            .apply(Action::SetQuantity("A0001".to_string(), MAX_ITEM_QUANTITY))
            .unwrap()
            .apply(add("B0002", MAX_PRICE_CENTS))
            .unwrap()
            .apply(Action::SetQuantity("B0002".to_string(), MAX_ITEM_QUANTITY))
            .unwrap();

        let totals = cart.totals();
        assert_eq!(totals.total_items, 1998);
        assert_eq!(totals.total_price_cents, 199_800_000_000);
        assert_eq!(totals.total_price, "$1,998,000,000.00");
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let huge = CartItem {
            quantity: 2,
            ..item("A0001", i64::MAX / 2)
        };
        let cart = Cart {
            items: vec![huge, item("B0002", 2)],
        };

        assert_eq!(cart.checked_total_price(), None);
        assert_eq!(
            transition(&cart, Action::Remove("C0003".to_string())),
            Err(CoreError::TotalTooLarge)
        );

        let fixed = Cart {
            items: vec![item("A0001", i64::MAX / 2)],
        };
        assert_eq!(fixed.checked_total_price(), Some(Money::from_cents(i64::MAX / 2)));
        assert_eq!(
            transition(&fixed, Action::SetQuantity("A0001".to_string(), 3)),
            Err(CoreError::TotalTooLarge)
        );
    }

    #[test]
    fn test_add_takes_latest_snapshot() {
        let cart = Cart::new()
            .apply(add("A0001", 1000))
            .unwrap()
            .apply(Action::Add(CartItem::new("A0001", "Renamed", Money::from_cents(1200))))
            .unwrap();

        let line = cart.get("A0001").unwrap();
        assert_eq!(line.name, "Renamed");
        assert_eq!(line.unit_price_cents, 1200);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_submit_empties_cart() {
        let cart = Cart::new()
            .apply(add("A0001", 1000))
            .unwrap()
            .apply(add("B0002", 500))
            .unwrap()
            .apply(Action::Submit)
            .unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_transition_does_not_touch_input() {
        let before = Cart::new().apply(add("A0001", 1000)).unwrap();
        let snapshot = before.clone();

        let _ = transition(&before, add("A0001", 1000)).unwrap();
        let _ = transition(&before, Action::Submit).unwrap();
        let _ = transition(&before, Action::SetQuantity("A0001".to_string(), 9)).unwrap();

        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_items_sorted_by_display_key() {
        let cart = Cart::new()
            .apply(add("item0003", 2999))
            .unwrap()
            .apply(add("item0001", 999))
            .unwrap()
            .apply(add("item0002", 1999))
            .unwrap()
            .apply(add("item0001", 999))
            .unwrap();

        assert_eq!(skus(&cart), vec!["item0001", "item0002", "item0003"]);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let cart = Cart::new()
            .apply(add("B0001", 100))
            .unwrap()
            .apply(add("A0001", 100))
            .unwrap()
            .apply(add("GIFT", 100))
            .unwrap();

        assert_eq!(skus(&cart), vec!["GIFT", "B0001", "A0001"]);
    }

    #[test]
    fn test_add_existing_sku_keeps_position() {
        let cart = Cart::new()
            .apply(add("B0001", 100))
            .unwrap()
            .apply(add("A0001", 100))
            .unwrap()
            .apply(add("B0001", 100))
            .unwrap();

        assert_eq!(skus(&cart), vec!["B0001", "A0001"]);
        assert_eq!(cart.get("B0001").unwrap().quantity, 2);
    }

    #[test]
    fn test_totals_summary() {
        let cart = Cart::new()
            .apply(add("item0001", 999))
            .unwrap()
            .apply(add("item0003", 2999))
            .unwrap()
            .apply(Action::SetQuantity("item0003".to_string(), 40))
            .unwrap();

        let totals = cart.totals();
        assert_eq!(totals.total_items, 41);
        assert_eq!(totals.total_price_cents, 120_959);
        assert_eq!(totals.total_price, "$1,209.59");
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    fn sku_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["item0001", "item0002", "item0003", "B0010", "GIFT"])
            .prop_map(str::to_string)
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            4 => (sku_strategy(), 0i64..10_000).prop_map(|(sku, cents)| Action::Add(item(&sku, cents))),
            2 => sku_strategy().prop_map(Action::Remove),
            2 => (sku_strategy(), 1u32..=50).prop_map(|(sku, q)| Action::SetQuantity(sku, q)),
            1 => Just(Action::Submit),
        ]
    }

    /// Applies actions, skipping the ones the cart rejects.
    fn run(actions: Vec<Action>) -> Cart {
        actions
            .into_iter()
            .fold(Cart::new(), |cart, action| cart.apply(action).unwrap_or(cart))
    }

    proptest! {
        #[test]
        fn adds_of_one_sku_count_up(n in 1u32..200) {
            let mut cart = Cart::new();
            for _ in 0..n {
                cart = cart.apply(add("A0001", 1000)).unwrap();
            }
            prop_assert_eq!(cart.len(), 1);
            prop_assert_eq!(cart.get("A0001").unwrap().quantity, n);
            prop_assert_eq!(cart.total_items(), u64::from(n));
        }

        #[test]
        fn remove_is_idempotent(actions in prop::collection::vec(action_strategy(), 0..30), sku in sku_strategy()) {
            let cart = run(actions);
            let once = cart.apply(Action::Remove(sku.clone())).unwrap();
            let twice = once.apply(Action::Remove(sku.clone())).unwrap();
            prop_assert!(!once.contains(&sku));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn set_quantity_on_absent_sku_fails(actions in prop::collection::vec(action_strategy(), 0..30), q in 1u32..100) {
            let cart = run(actions).apply(Action::Remove("item0002".to_string())).unwrap();
            let result = cart.apply(Action::SetQuantity("item0002".to_string(), q));
            prop_assert_eq!(result, Err(CoreError::UnknownSku("item0002".to_string())));
        }

        #[test]
        fn submit_always_empties(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let cart = run(actions).apply(Action::Submit).unwrap();
            prop_assert!(cart.is_empty());
            prop_assert_eq!(cart.total_items(), 0);
            prop_assert_eq!(cart.total_price(), Money::zero());
        }

        #[test]
        fn totals_match_lines(actions in prop::collection::vec(action_strategy(), 0..40)) {
            let cart = run(actions);
            let expected: i64 = cart
                .items()
                .iter()
                .map(|i| i.unit_price_cents * i64::from(i.quantity))
                .sum();
            prop_assert_eq!(cart.total_price().cents(), expected);
        }

        #[test]
        fn bounded_prices_never_overflow(
            lines in prop::collection::vec((0i64..=MAX_PRICE_CENTS, 1u32..=MAX_ITEM_QUANTITY), 1..20)
        ) {
            let mut cart = Cart::new();
            for (n, (cents, quantity)) in lines.into_iter().enumerate() {
                let sku = format!("P{:04}", n);
                cart = cart.apply(add(&sku, cents)).unwrap();
                cart = cart.apply(Action::SetQuantity(sku, quantity)).unwrap();
            }
            let expected: i128 = cart
                .items()
                .iter()
                .map(|i| i128::from(i.unit_price_cents) * i128::from(i.quantity))
                .sum();
            prop_assert_eq!(i128::from(cart.total_price().cents()), expected);
        }

        #[test]
        fn invariants_hold(actions in prop::collection::vec(action_strategy(), 0..40)) {
            let cart = run(actions);
            let mut seen = std::collections::HashSet::new();
            for line in cart.items() {
                prop_assert!(seen.insert(line.sku.clone()), "duplicate sku {}", line.sku);
                prop_assert!(line.quantity >= 1 && line.quantity <= MAX_ITEM_QUANTITY);
            }
            let keys: Vec<u32> = cart.items().iter().map(CartItem::display_key).collect();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
