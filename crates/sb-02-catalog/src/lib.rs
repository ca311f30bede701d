//! # SB-02 Catalog
//!
//! Product catalog module. Keeps a product list and mirrors the login flag
//! it learns by querying `IS_LOGGED_IN` over the bus; it never talks to the
//! Auth module directly.
//!
//! ## Messages
//!
//! | Message        | Direction | Effect                                  |
//! |----------------|-----------|-----------------------------------------|
//! | `IS_LOGGED_IN` | publishes | On init and before every product add    |
//! | `ADD_PRODUCT`  | handles   | Appends the product while logged in     |
//!
//! Initialize it AFTER the module that answers `IS_LOGGED_IN`, otherwise the
//! init-time query goes unanswered.

pub mod domain;
pub mod error;
pub mod module;

pub use domain::Catalog;
pub use error::CatalogError;
pub use module::{CatalogHandle, CatalogModule};
