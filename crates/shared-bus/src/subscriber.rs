//! # Listener Registration
//!
//! Defines the subscription side of the bus: the [`Listener`] type, the
//! [`Unsubscribe`] handle returned by `subscribe`, and the [`on`] adapter.
//!
//! Listener identity is the identity of its `Arc` allocation. Subscribing a
//! clone of an already registered listener keeps a single membership.

use crate::error::ListenerError;
use crate::message::{Message, MessageCreator};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// A callback that receives every message published on the bus.
pub type Listener = Arc<dyn Fn(&Message) -> Result<(), ListenerError> + Send + Sync>;

/// Wrap a closure as a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&Message) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Build a listener that forwards only messages created by `creator`.
///
/// Messages with another tag are ignored. If the tag matches but the payload
/// is not a `P` (two creators sharing a tag), the callback is skipped.
pub fn on<P, F>(creator: MessageCreator<P>, callback: F) -> Listener
where
    P: Any + Send + Sync,
    F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    Arc::new(move |message: &Message| {
        if !creator.matches(message) {
            return Ok(());
        }
        match message.payload_as::<P>() {
            Some(payload) => callback(payload),
            None => {
                warn!(
                    message_type = %message.message_type(),
                    expected = std::any::type_name::<P>(),
                    "Payload type mismatch for tag, callback skipped"
                );
                Ok(())
            }
        }
    })
}

/// Trait for registering listeners on the bus.
pub trait EventSubscriber: Send + Sync {
    /// Register `listener` and return the handle that removes it again.
    fn subscribe(&self, listener: Listener) -> Unsubscribe;
}

fn same_listener(a: &Listener, b: &Listener) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Insertion-ordered set of active listeners.
#[derive(Default)]
pub(crate) struct Registry {
    listeners: Vec<Listener>,
}

impl Registry {
    /// Returns false if the listener was already registered.
    pub(crate) fn insert(&mut self, listener: Listener) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub(crate) fn remove(&mut self, listener: &Listener) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same_listener(l, listener));
        self.listeners.len() != before
    }

    pub(crate) fn contains(&self, listener: &Listener) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.listeners.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle does NOT unsubscribe; a listener that is never
/// explicitly removed lives as long as the bus.
pub struct Unsubscribe {
    registry: Weak<RwLock<Registry>>,
    listener: Listener,
    used: AtomicBool,
}

impl Unsubscribe {
    pub(crate) fn new(registry: &Arc<RwLock<Registry>>, listener: Listener) -> Self {
        Self {
            registry: Arc::downgrade(registry),
            listener,
            used: AtomicBool::new(false),
        }
    }

    /// A handle for a listener that never reached a bus.
    pub(crate) fn detached(listener: Listener) -> Self {
        Self {
            registry: Weak::new(),
            listener,
            used: AtomicBool::new(false),
        }
    }

    /// Remove the listener from the bus.
    ///
    /// Only the first call has an effect. Returns true if this call removed
    /// the listener.
    pub fn unsubscribe(&self) -> bool {
        if self.used.swap(true, Ordering::AcqRel) {
            return false;
        }
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.write();
        let removed = registry.remove(&self.listener);
        debug!(removed, remaining = registry.len(), "Listener unsubscribed");
        removed
    }

    /// True until the handle is used or the bus is gone.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.used.load(Ordering::Acquire) && self.registry.strong_count() > 0
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("active", &self.is_active())
            .finish()
    }
}
