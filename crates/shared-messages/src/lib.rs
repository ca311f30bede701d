//! # Shared Messages Crate
//!
//! The message kinds and payloads that modules exchange over the shared bus.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-module message kind is defined here
//! - **No module coupling**: modules import this catalog, never each other
//! - **Request/reply by callback**: queries carry a [`Reply`] in their payload

pub mod entities;
pub mod messages;

pub use entities::{Credentials, Product};
pub use messages::{reply, Reply, ADD_PRODUCT, IS_LOGGED_IN, LOGIN, LOGOUT};
