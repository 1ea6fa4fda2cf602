//! Product page: one card per catalog product.

use std::fmt;

use crate::commands::product::ProductListing;

/// One product with its add button.
#[derive(Debug, Clone, Copy)]
pub struct ProductCard<'a> {
    listing: &'a ProductListing,
}

impl<'a> ProductCard<'a> {
    pub fn new(listing: &'a ProductListing) -> Self {
        ProductCard { listing }
    }
}

impl fmt::Display for ProductCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing = self.listing;
        writeln!(f, "{} ({})", listing.name, listing.sku)?;
        write!(f, "  {}", listing.price)?;
        if listing.in_cart {
            write!(f, " → Item in Cart: ✔️")?;
        }
        writeln!(f)?;
        writeln!(f, "  [Add to cart: add {}]", listing.sku)
    }
}

/// The product page.
#[derive(Debug, Clone, Copy)]
pub struct ProductList<'a> {
    listings: &'a [ProductListing],
}

impl<'a> ProductList<'a> {
    pub fn new(listings: &'a [ProductListing]) -> Self {
        ProductList { listings }
    }
}

impl fmt::Display for ProductList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.listings.is_empty() {
            return writeln!(f, "No products available.");
        }
        for listing in self.listings {
            write!(f, "{}", ProductCard::new(listing))?;
        }
        Ok(())
    }
}
