//! Error types for the Catalog module

use thiserror::Error;

/// Reasons a product is refused by the catalog.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog is read-only while logged out")]
    NotLoggedIn,

    #[error("product name must not be empty")]
    EmptyName,

    #[error("invalid price {price} for `{name}`")]
    InvalidPrice { name: String, price: f64 },
}
