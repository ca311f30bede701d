//! # SB-01 Auth
//!
//! Authentication session module. Owns the login flag and answers
//! `IS_LOGGED_IN` queries for the rest of the system.
//!
//! ## Messages
//!
//! | Message        | Effect                                   |
//! |----------------|------------------------------------------|
//! | `IS_LOGGED_IN` | Calls the reply with the current flag    |
//! | `LOGIN`        | Starts a session (rejects blank input)   |
//! | `LOGOUT`       | Ends the session                         |
//!
//! ## Usage
//!
//! ```ignore
//! let auth = AuthModule::new();
//! let session = auth.handle();
//! let bus = shared_bus::bootstrap(&[&auth])?;
//! assert!(!session.is_logged_in());
//! ```

pub mod domain;
pub mod error;
pub mod module;

pub use domain::Session;
pub use error::AuthError;
pub use module::{AuthHandle, AuthModule};
