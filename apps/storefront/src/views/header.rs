//! Store header.

use std::fmt;

use shopcart_core::CartTotals;

use super::{Nav, Page};

/// Store banner with running totals and navigation.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    store_name: &'a str,
    totals: &'a CartTotals,
    page: Page,
}

impl<'a> Header<'a> {
    pub fn new(store_name: &'a str, totals: &'a CartTotals, page: Page) -> Self {
        Header {
            store_name,
            totals,
            page,
        }
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.store_name)?;
        writeln!(f, "Total Items: {}", self.totals.total_items)?;
        writeln!(f, "Total Price: {}", self.totals.total_price)?;
        write!(f, "{}", Nav::new(self.page))
    }
}
