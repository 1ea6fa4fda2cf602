//! # Storefront
//!
//! The application root: owns the injected state handles and the current
//! page, turns user intents into commands, and renders the full screen.

use chrono::{Datelike, Local};

use crate::commands;
use crate::commands::cart::CartResponse;
use crate::commands::product::ProductListing;
use crate::error::ApiError;
use crate::state::{CartStore, CatalogState, ConfigState};
use crate::views::{CartPage, Footer, Header, Page, ProductList};

/// The storefront application.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: ConfigState,
    catalog: CatalogState,
    cart: CartStore,
    page: Page,
    /// Set by a placed order, cleared by the next cart change or navigation.
    confirmed: bool,
    year: i32,
}

impl Storefront {
    pub fn new(config: ConfigState, catalog: CatalogState, cart: CartStore) -> Self {
        Storefront {
            config,
            catalog,
            cart,
            page: Page::default(),
            confirmed: false,
            year: Local::now().year(),
        }
    }

    /// Pins the copyright year shown in the footer.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn config(&self) -> ConfigState {
        commands::config::get_config(&self.config)
    }

    /// Looks up one catalog product, flagged with whether it is in the cart.
    pub fn product(&self, sku: &str) -> Result<ProductListing, ApiError> {
        commands::product::get_product(&self.catalog, &self.cart, sku)
    }

    pub fn show(&mut self, page: Page) {
        if page != self.page {
            self.confirmed = false;
        }
        self.page = page;
    }

    /// Switches to the other page (the nav button).
    pub fn toggle_page(&mut self) {
        self.show(self.page.toggled());
    }

    pub fn add(&mut self, sku: &str) -> Result<CartResponse, ApiError> {
        let response = commands::cart::add_to_cart(&self.catalog, &self.cart, sku)?;
        self.confirmed = false;
        Ok(response)
    }

    pub fn set_quantity(&mut self, sku: &str, quantity: u32) -> Result<CartResponse, ApiError> {
        let response = commands::cart::update_cart_item(&self.cart, sku, quantity)?;
        self.confirmed = false;
        Ok(response)
    }

    pub fn remove(&mut self, sku: &str) -> Result<CartResponse, ApiError> {
        let response = commands::cart::remove_from_cart(&self.cart, sku)?;
        self.confirmed = false;
        Ok(response)
    }

    /// Places the order and shows the confirmation on the cart page.
    ///
    /// An empty cart cannot be ordered, matching the disabled button.
    pub fn place_order(&mut self) -> Result<CartResponse, ApiError> {
        if self.cart.with_cart(|c| c.is_empty()) {
            return Err(ApiError::validation("Cart is empty"));
        }
        let ordered = commands::cart::submit_order(&self.cart)?;
        self.page = Page::Cart;
        self.confirmed = true;
        Ok(ordered)
    }

    pub fn dispatch_json(&mut self, json: &str) -> Result<CartResponse, ApiError> {
        let response = commands::cart::dispatch_json(&self.cart, json)?;
        self.confirmed = false;
        Ok(response)
    }

    /// Renders header, current page and footer.
    pub fn render(&self) -> String {
        let cart = self.cart.snapshot();
        let totals = cart.totals();

        let body = match self.page {
            Page::Products => {
                let listings = commands::product::list_products(&self.catalog, &self.cart);
                ProductList::new(&listings).to_string()
            }
            Page::Cart => {
                CartPage::new(&cart, self.confirmed, self.config.quantity_options).to_string()
            }
        };

        format!(
            "{}\n{}\n{}",
            Header::new(&self.config.store_name, &totals, self.page),
            body,
            Footer::new(self.page, &totals, self.year)
        )
    }
}
