//! Error types for the Auth module

use thiserror::Error;

/// Reasons a login attempt is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("username must not be empty")]
    EmptyUsername,
}
