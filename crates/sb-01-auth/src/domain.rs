//! Session state owned by the Auth module.

use crate::error::AuthError;
use shared_messages::Credentials;

/// Current login session. Starts logged out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Start a session for `credentials.username`.
    ///
    /// The password is not checked. A second login replaces the current
    /// user.
    pub fn login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.username.trim().is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        self.user = Some(credentials.username.clone());
        Ok(())
    }

    /// End the session, returning the user that was logged in.
    pub fn logout(&mut self) -> Option<String> {
        self.user.take()
    }
}
