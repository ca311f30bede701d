//! # Bus Errors
//!
//! Failure modes:
//!
//! - Duplicate tags are not detected.
//! - A failing listener aborts the fan-out and surfaces from `publish`.
//! - A failing module aborts bootstrap and surfaces from `bootstrap`.
//! - Publishing through a module capability after the bus is dropped
//!   surfaces as [`BusError::Closed`].
//!
//! Panics are never caught by the bus; they unwind through `publish` and
//! `bootstrap` like any other call.

use crate::message::MessageType;
use thiserror::Error;

/// Error returned by a listener to stop the current fan-out.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listener refused the message.
    #[error("rejected: {0}")]
    Rejected(String),

    /// A publish made from inside the listener failed.
    #[error("nested publish failed: {0}")]
    Publish(#[source] Box<BusError>),
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

impl From<BusError> for ListenerError {
    fn from(err: BusError) -> Self {
        Self::Publish(Box::new(err))
    }
}

/// Errors from publishing on the bus.
#[derive(Debug, Error)]
pub enum BusError {
    /// A listener failed; listeners after it did not see the message.
    #[error("listener #{position} failed while handling `{message_type}`")]
    ListenerFailed {
        /// Tag of the message being delivered.
        message_type: MessageType,
        /// Zero-based position of the listener in the fan-out.
        position: usize,
        /// What the listener reported.
        #[source]
        source: ListenerError,
    },

    /// The bus behind a module capability has been dropped.
    #[error("bus closed, `{message_type}` not delivered")]
    Closed { message_type: MessageType },
}

/// Errors raised by a module while it initializes.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module `{module}` failed to initialize: {reason}")]
    Init { module: &'static str, reason: String },

    #[error(transparent)]
    Publish(#[from] BusError),
}

/// Errors from [`crate::bootstrap`].
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A module failed; modules after it were not initialized.
    #[error("module `{module}` (position {position}) failed during bootstrap")]
    ModuleFailed {
        module: &'static str,
        position: usize,
        #[source]
        source: ModuleError,
    },
}
