//! # Session Scripts
//!
//! A session is a JSON array of steps replayed against a bootstrapped bus:
//!
//! ```json
//! [
//!   { "action": "add_product", "name": "mug", "price": 9.5 },
//!   { "action": "login", "username": "ada", "password": "secret" },
//!   { "action": "add_product", "name": "mug", "price": 9.5 },
//!   { "action": "logout" }
//! ]
//! ```
//!
//! Each step becomes one publish. A rejected step is logged and counted;
//! replay continues with the next one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared_bus::{BusError, EventPublisher, Message};
use shared_messages::{Credentials, Product, ADD_PRODUCT, LOGIN, LOGOUT};
use thiserror::Error;
use tracing::{debug, warn};

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionStep {
    Login { username: String, password: String },
    Logout,
    AddProduct { name: String, price: f64 },
}

impl SessionStep {
    /// The bus message for this step.
    pub fn to_message(&self) -> Message {
        match self {
            Self::Login { username, password } => {
                LOGIN.create(Credentials::new(username.as_str(), password.as_str()))
            }
            Self::Logout => LOGOUT.create(()),
            Self::AddProduct { name, price } => ADD_PRODUCT.create(Product::new(name.as_str(), *price)),
        }
    }
}

/// Errors loading a session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot read session file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid session file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a session script.
pub fn load_session(path: &Path) -> Result<Vec<SessionStep>, SessionError> {
    let text = fs::read_to_string(path).map_err(|source| SessionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SessionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of a replay.
#[derive(Debug, Default)]
pub struct SessionReport {
    /// Steps every listener accepted.
    pub applied: usize,
    /// Steps some listener rejected, with their index in the script.
    pub rejected: Vec<(usize, BusError)>,
}

/// Publish every step in order.
pub fn replay(publisher: &impl EventPublisher, steps: &[SessionStep]) -> SessionReport {
    let mut report = SessionReport::default();

    for (index, step) in steps.iter().enumerate() {
        match publisher.publish(&step.to_message()) {
            Ok(()) => {
                debug!(step = index, "Session step applied");
                report.applied += 1;
            }
            Err(e) => {
                warn!(step = index, error = %e, "Session step rejected");
                report.rejected.push((index, e));
            }
        }
    }

    report
}
