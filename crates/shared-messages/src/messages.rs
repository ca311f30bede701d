//! # Message Catalog
//!
//! Every message kind exchanged between the sample modules.
//!
//! | Creator        | Tag              | Payload          | Handled by |
//! |----------------|------------------|------------------|------------|
//! | `IS_LOGGED_IN` | `is_logged_in`   | `Reply<bool>`    | auth       |
//! | `LOGIN`        | `login`          | `Credentials`    | auth       |
//! | `LOGOUT`       | `logout`         | `()`             | auth       |
//! | `ADD_PRODUCT`  | `add_product`    | `Product`        | catalog    |
//!
//! Tags must stay unique across this table.

use crate::entities::{Credentials, Product};
use shared_bus::{define_message, MessageCreator};
use std::sync::Arc;

/// Reply callback carried inside a request message.
///
/// The handler answers by calling it synchronously, before `publish`
/// returns to the requester.
pub type Reply<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Wrap a closure as a [`Reply`].
pub fn reply<T, F>(f: F) -> Reply<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Ask whether a user is logged in.
pub static IS_LOGGED_IN: MessageCreator<Reply<bool>> = define_message("is_logged_in");

pub static LOGIN: MessageCreator<Credentials> = define_message("login");

pub static LOGOUT: MessageCreator<()> = define_message("logout");

pub static ADD_PRODUCT: MessageCreator<Product> = define_message("add_product");
