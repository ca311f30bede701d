//! # Module Contract
//!
//! A module is initialized exactly once, at bootstrap, with two narrow
//! capabilities bound to one bus: a [`Publisher`] and a [`Subscriber`].
//! Both are cheap to clone, so a module can keep them inside the listeners
//! it registers.
//!
//! Modules own their private state; neither the bus nor bootstrap can see
//! it. Request/reply is modelled as a request message whose payload is a
//! reply callback; the bus has no reply primitive of its own.

use crate::error::{BusError, ModuleError};
use crate::message::Message;
use crate::publisher::{Bus, EventPublisher, WeakBus};
use crate::subscriber::{EventSubscriber, Listener, Unsubscribe};
use std::fmt;
use tracing::warn;

/// Publish capability handed to a module.
///
/// Does not keep the bus alive. Once the host drops its last [`Bus`]
/// handle, publishing fails with [`BusError::Closed`].
#[derive(Clone)]
pub struct Publisher {
    bus: WeakBus,
}

impl Publisher {
    pub(crate) fn new(bus: &Bus) -> Self {
        Self {
            bus: bus.downgrade(),
        }
    }
}

impl EventPublisher for Publisher {
    fn publish(&self, message: &Message) -> Result<(), BusError> {
        match self.bus.upgrade() {
            Some(bus) => bus.publish(message),
            None => {
                warn!(message_type = %message.message_type(), "Bus dropped, message not delivered");
                Err(BusError::Closed {
                    message_type: message.message_type(),
                })
            }
        }
    }
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("bus", &self.bus.upgrade())
            .finish()
    }
}

/// Subscribe capability handed to a module.
///
/// Like [`Publisher`], it does not keep the bus alive; subscribing after
/// the bus is gone returns an inactive handle.
#[derive(Clone)]
pub struct Subscriber {
    bus: WeakBus,
}

impl Subscriber {
    pub(crate) fn new(bus: &Bus) -> Self {
        Self {
            bus: bus.downgrade(),
        }
    }
}

impl EventSubscriber for Subscriber {
    fn subscribe(&self, listener: Listener) -> Unsubscribe {
        match self.bus.upgrade() {
            Some(bus) => bus.subscribe(listener),
            None => {
                warn!("Bus dropped, listener not registered");
                Unsubscribe::detached(listener)
            }
        }
    }
}

impl fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("bus", &self.bus.upgrade())
            .finish()
    }
}

/// Trait that all modules implement to be wired by [`crate::bootstrap`].
pub trait Module {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Called once with capabilities bound to the shared bus.
    ///
    /// A module may publish immediately; the message reaches every listener
    /// registered by modules initialized before it.
    fn init(&self, publisher: Publisher, subscriber: Subscriber) -> Result<(), ModuleError>;
}

/// A module defined by a closure.
pub struct FnModule<F> {
    name: &'static str,
    init: F,
}

/// Wrap `init` as a [`Module`] called `name`.
pub fn module_fn<F>(name: &'static str, init: F) -> FnModule<F>
where
    F: Fn(Publisher, Subscriber) -> Result<(), ModuleError>,
{
    FnModule { name, init }
}

impl<F> Module for FnModule<F>
where
    F: Fn(Publisher, Subscriber) -> Result<(), ModuleError>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn init(&self, publisher: Publisher, subscriber: Subscriber) -> Result<(), ModuleError> {
        (self.init)(publisher, subscriber)
    }
}
