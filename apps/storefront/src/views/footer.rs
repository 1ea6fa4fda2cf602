//! Page footer with totals and copyright.

use std::fmt;

use shopcart_core::CartTotals;

use super::Page;

/// Page footer. The product page repeats the cart totals here; the cart page
/// already shows them in its summary.
#[derive(Debug, Clone, Copy)]
pub struct Footer<'a> {
    page: Page,
    totals: &'a CartTotals,
    year: i32,
}

impl<'a> Footer<'a> {
    pub fn new(page: Page, totals: &'a CartTotals, year: i32) -> Self {
        Footer { page, totals, year }
    }
}

impl fmt::Display for Footer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.page == Page::Products {
            writeln!(f, "Total items: {}", self.totals.total_items)?;
            writeln!(f, "Total price: {}", self.totals.total_price)?;
        }
        writeln!(f, "Shopping Cart © {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::{Action, Cart, CartItem, Money};

    #[test]
    fn test_product_page_shows_totals() {
        let cart = Cart::new()
            .apply(Action::Add(CartItem::new("A0001", "X", Money::from_cents(1000))))
            .unwrap();
        let totals = cart.totals();

        assert_eq!(
            Footer::new(Page::Products, &totals, 2026).to_string(),
            "Total items: 1\nTotal price: $10.00\nShopping Cart © 2026\n"
        );
    }

    #[test]
    fn test_cart_page_shows_copyright_only() {
        let totals = Cart::new().totals();
        assert_eq!(
            Footer::new(Page::Cart, &totals, 2026).to_string(),
            "Shopping Cart © 2026\n"
        );
    }
}
