//! # Product Catalog
//!
//! The read-only list of products a storefront offers.
//!
//! A catalog is validated once when it is built; after that it never changes
//! and the cart only ever reads from it.
//!
//! ## Catalog File Format
//! ```json
//! [
//!   { "sku": "item0001", "name": "Widget", "price_cents": 999 },
//!   { "sku": "item0002", "name": "Premium Widget", "price_cents": 1999 }
//! ]
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_price_cents, validate_product_name, validate_sku};

/// An ordered, validated product list with unique skus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid or duplicate entries.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_sku(&product.sku)?;
            validate_product_name(&product.name)?;
            validate_price_cents(product.price_cents)?;

            if !seen.insert(product.sku.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "sku".to_string(),
                    value: product.sku.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// Parses and validates a JSON catalog file.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
                field: "catalog".to_string(),
                reason: e.to_string(),
            })?;

        Catalog::new(products)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Like [`Catalog::get`], but a miss is an error.
    pub fn require(&self, sku: &str) -> CoreResult<&Product> {
        self.get(sku)
            .ok_or_else(|| CoreError::ProductNotFound(sku.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The demo catalog of three widgets.
impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            products: vec![
                Product::new("item0001", "Widget", Money::from_cents(999)),
                Product::new("item0002", "Premium Widget", Money::from_cents(1999)),
                Product::new("item0003", "Deluxe Widget", Money::from_cents(2999)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("item0002").unwrap().name, "Premium Widget");
        assert_eq!(catalog.get("item0003").unwrap().price().to_string(), "$29.99");
        // The demo data must pass its own validation
        assert_eq!(Catalog::new(catalog.products().to_vec()).unwrap(), catalog);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[
                {"sku": "B0002", "name": "Bolt", "price_cents": 25},
                {"sku": "N0001", "name": "Nut", "price_cents": 10}
            ]"#,
        )
        .unwrap();

        let skus: Vec<&str> = catalog.products().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["B0002", "N0001"]);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { ref field, .. }) if field == "catalog"
        ));

        let err = Catalog::from_json(r#"[{"sku": "A1", "name": "X", "price_cents": -5}]"#).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));

        let err = Catalog::from_json(
            r#"[{"sku": "A1", "name": "X", "price_cents": 9223372036854775807}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));

        let err = Catalog::from_json(
            r#"[{"sku": "A1", "name": "X", "price_cents": 5}, {"sku": "A1", "name": "Y", "price_cents": 6}]"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: "A1".to_string()
            })
        );
    }

    #[test]
    fn test_require() {
        let catalog = Catalog::default();
        assert!(catalog.require("item0001").is_ok());
        assert_eq!(
            catalog.require("item0404").unwrap_err(),
            CoreError::ProductNotFound("item0404".to_string())
        );
    }
}
