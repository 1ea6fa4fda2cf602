//! Cart page and its line items.

use std::fmt;
use std::ops::RangeInclusive;

use shopcart_core::{Cart, CartItem};

/// Choices for a line's quantity selector: `1..=max(option_count, quantity)`,
/// so a quantity set above the usual range stays selectable.
pub fn quantity_options(quantity: u32, option_count: u32) -> RangeInclusive<u32> {
    1..=option_count.max(quantity)
}

/// One cart line: unit price, quantity selector, subtotal, remove button.
#[derive(Debug, Clone, Copy)]
pub struct CartLineItem<'a> {
    item: &'a CartItem,
    option_count: u32,
}

impl<'a> CartLineItem<'a> {
    pub fn new(item: &'a CartItem, option_count: u32) -> Self {
        CartLineItem { item, option_count }
    }

    pub fn options(&self) -> RangeInclusive<u32> {
        quantity_options(self.item.quantity, self.option_count)
    }
}

impl fmt::Display for CartLineItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.item;
        let options = self.options();
        writeln!(
            f,
            "{} ({})  {}  qty [{}] of {}-{}  {}  [X: remove {}]",
            item.name,
            item.sku,
            item.unit_price(),
            item.quantity,
            options.start(),
            options.end(),
            item.line_total(),
            item.sku
        )
    }
}

/// The cart page, or the order confirmation right after an order.
#[derive(Debug, Clone, Copy)]
pub struct CartPage<'a> {
    cart: &'a Cart,
    confirmed: bool,
    option_count: u32,
}

impl<'a> CartPage<'a> {
    pub fn new(cart: &'a Cart, confirmed: bool, option_count: u32) -> Self {
        CartPage {
            cart,
            confirmed,
            option_count,
        }
    }
}

impl fmt::Display for CartPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.confirmed {
            return writeln!(f, "Thank you for your order.");
        }

        writeln!(f, "Cart")?;
        for item in self.cart.items() {
            write!(f, "  {}", CartLineItem::new(item, self.option_count))?;
        }

        let totals = self.cart.totals();
        writeln!(f, "Total Items: {}", totals.total_items)?;
        writeln!(f, "Total Price: {}", totals.total_price)?;
        if totals.total_items == 0 {
            writeln!(f, "[Place Order] (disabled)")
        } else {
            writeln!(f, "[Place Order: order]")
        }
    }
}
