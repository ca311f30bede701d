//! Catalog state owned by the Catalog module.

use crate::error::CatalogError;
use shared_messages::Product;

/// Products plus the last known login flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    is_logged_in: bool,
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn set_logged_in(&mut self, value: bool) {
        self.is_logged_in = value;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Append `product`. Only allowed while logged in.
    pub fn add(&mut self, product: Product) -> Result<(), CatalogError> {
        if !self.is_logged_in {
            return Err(CatalogError::NotLoggedIn);
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                name: product.name,
                price: product.price,
            });
        }
        self.products.push(product);
        Ok(())
    }
}
