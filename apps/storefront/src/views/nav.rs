//! Navigation button between the product and cart pages.

use std::fmt;

use super::Page;

/// The single navigation button: leads to whichever page is not showing.
#[derive(Debug, Clone, Copy)]
pub struct Nav {
    page: Page,
}

impl Nav {
    pub fn new(page: Page) -> Self {
        Nav { page }
    }

    pub fn label(&self) -> &'static str {
        match self.page {
            Page::Products => "View cart",
            Page::Cart => "Back to products",
        }
    }
}

impl fmt::Display for Nav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_page() {
        assert_eq!(Nav::new(Page::Products).to_string(), "[View cart]\n");
        assert_eq!(Nav::new(Page::Cart).to_string(), "[Back to products]\n");
    }
}
