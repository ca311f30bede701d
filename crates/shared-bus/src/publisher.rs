//! # Message Publisher
//!
//! Defines the publishing side of the bus and the in-memory [`Bus`] itself.

use crate::error::BusError;
use crate::message::Message;
use crate::subscriber::{EventSubscriber, Listener, Registry, Unsubscribe};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Trait for publishing messages to the bus.
pub trait EventPublisher: Send + Sync {
    /// Deliver `message` to every registered listener, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::ListenerFailed`] for the first listener that
    /// fails. Listeners after it do not see the message.
    fn publish(&self, message: &Message) -> Result<(), BusError>;
}

/// Synchronous in-memory bus.
///
/// `Bus` is a handle: clones share one registry. Delivery happens on the
/// caller's thread before `publish` returns.
///
/// ## Fan-out during mutation
///
/// `publish` copies the registry under a read lock and releases the lock
/// before calling any listener. Listeners may therefore publish, subscribe
/// or unsubscribe while being called:
///
/// - a listener added during a fan-out is first called on the next `publish`;
/// - a listener removed during a fan-out still gets the current message if it
///   was in the copy.
#[derive(Clone, Default)]
pub struct Bus {
    /// Active listeners.
    registry: Arc<RwLock<Registry>>,

    /// Total publish calls, including failed ones.
    messages_published: Arc<AtomicU64>,
}

impl Bus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently registered.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.read().len()
    }

    pub(crate) fn downgrade(&self) -> WeakBus {
        WeakBus {
            registry: Arc::downgrade(&self.registry),
            messages_published: Arc::downgrade(&self.messages_published),
        }
    }

    /// Total number of `publish` calls made on this bus.
    #[must_use]
    pub fn messages_published(&self) -> u64 {
        self.messages_published.load(Ordering::Relaxed)
    }
}

/// Non-owning reference to a [`Bus`].
///
/// Held by module capabilities, which usually end up captured by listeners
/// registered on the same bus.
#[derive(Clone, Default)]
pub(crate) struct WeakBus {
    registry: Weak<RwLock<Registry>>,
    messages_published: Weak<AtomicU64>,
}

impl WeakBus {
    pub(crate) fn upgrade(&self) -> Option<Bus> {
        Some(Bus {
            registry: self.registry.upgrade()?,
            messages_published: self.messages_published.upgrade()?,
        })
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("listeners", &self.listener_count())
            .field("messages_published", &self.messages_published())
            .finish()
    }
}

impl EventPublisher for Bus {
    fn publish(&self, message: &Message) -> Result<(), BusError> {
        let snapshot = self.registry.read().snapshot();
        let message_type = message.message_type();

        // Always increment counter (publish was attempted)
        self.messages_published.fetch_add(1, Ordering::Relaxed);

        debug!(
            message_type = %message_type,
            listeners = snapshot.len(),
            "Publishing message"
        );

        for (position, listener) in snapshot.iter().enumerate() {
            if let Err(source) = listener(message) {
                warn!(
                    message_type = %message_type,
                    position,
                    error = %source,
                    "Listener failed, fan-out aborted"
                );
                return Err(BusError::ListenerFailed {
                    message_type,
                    position,
                    source,
                });
            }
        }

        Ok(())
    }
}

impl EventSubscriber for Bus {
    fn subscribe(&self, listener: Listener) -> Unsubscribe {
        let inserted = {
            let mut registry = self.registry.write();
            let inserted = registry.insert(listener.clone());
            debug!(inserted, listeners = registry.len(), "Listener subscribed");
            inserted
        };
        if !inserted {
            debug!("Listener already registered, membership unchanged");
        }
        Unsubscribe::new(&self.registry, listener)
    }
}
