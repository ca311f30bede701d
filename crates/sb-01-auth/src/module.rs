//! Bus adapter for the Auth module.
//!
//! Handles:
//! 1. `IS_LOGGED_IN` queries, answered through the reply callback
//! 2. `LOGIN` / `LOGOUT` commands that update the private session

use crate::domain::Session;
use parking_lot::RwLock;
use shared_bus::{
    on, EventSubscriber, ListenerError, Module, ModuleError, Publisher, Subscriber,
};
use shared_messages::{Credentials, Reply, IS_LOGGED_IN, LOGIN, LOGOUT};
use std::sync::Arc;
use tracing::{debug, info, warn};

const MODULE_NAME: &str = "auth";

/// The Auth module. Starts logged out.
#[derive(Debug, Default)]
pub struct AuthModule {
    session: Arc<RwLock<Session>>,
}

impl AuthModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the session, for the host and tests.
    #[must_use]
    pub fn handle(&self) -> AuthHandle {
        AuthHandle {
            session: self.session.clone(),
        }
    }
}

/// Read-only view of the Auth session.
#[derive(Debug, Clone)]
pub struct AuthHandle {
    session: Arc<RwLock<Session>>,
}

impl AuthHandle {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<String> {
        self.session.read().user().map(str::to_string)
    }
}

impl Module for AuthModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn init(&self, _publisher: Publisher, subscriber: Subscriber) -> Result<(), ModuleError> {
        let session = self.session.clone();
        let _ = subscriber.subscribe(on(IS_LOGGED_IN, move |reply: &Reply<bool>| {
            // Guard dropped before replying; the reply may re-enter the bus.
            let logged_in = session.read().is_logged_in();
            reply(logged_in);
            Ok(())
        }));

        let session = self.session.clone();
        let _ = subscriber.subscribe(on(LOGIN, move |credentials: &Credentials| {
            session.write().login(credentials).map_err(|e| {
                warn!(module = MODULE_NAME, username = %credentials.username, error = %e, "Login rejected");
                ListenerError::rejected(e.to_string())
            })?;
            info!(module = MODULE_NAME, username = %credentials.username, "Login");
            Ok(())
        }));

        let session = self.session.clone();
        let _ = subscriber.subscribe(on(LOGOUT, move |_: &()| {
            match session.write().logout() {
                Some(user) => info!(module = MODULE_NAME, username = %user, "Logout"),
                None => debug!(module = MODULE_NAME, "Logout without active session"),
            }
            Ok(())
        }));

        debug!(module = MODULE_NAME, "Listeners registered");
        Ok(())
    }
}
