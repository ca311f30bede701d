//! # Message Identity
//!
//! A message is an immutable `(type, payload)` pair. The type is a plain
//! string tag; the payload is shared behind an `Arc` so that fan-out never
//! copies it.
//!
//! Messages are only built through a [`MessageCreator`], which binds one tag
//! to one payload type and doubles as the matcher used by [`crate::on`]:
//!
//! ```
//! use shared_bus::{define_message, MessageCreator};
//!
//! static PING: MessageCreator<u32> = define_message("ping");
//!
//! let message = PING.create(7);
//! assert!(PING.matches(&message));
//! assert_eq!(PING.extract(&message), Some(&7));
//! ```
//!
//! Tag uniqueness is the caller's job. Two creators with the same tag match
//! each other's messages.

use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Tag identifying a message kind within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MessageType(&'static str);

impl MessageType {
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Type-erased payload carried by a [`Message`].
pub type Payload = Arc<dyn Any + Send + Sync>;

/// An immutable, tagged message as delivered to listeners.
#[derive(Clone)]
pub struct Message {
    message_type: MessageType,
    payload: Payload,
}

impl Message {
    /// The tag this message was created with.
    #[must_use]
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// View the payload as `P`, ignoring the tag.
    ///
    /// Prefer [`MessageCreator::extract`], which also checks the tag.
    #[must_use]
    pub fn payload_as<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("message_type", &self.message_type)
            .finish_non_exhaustive()
    }
}

/// Factory and matcher bound to exactly one message tag.
///
/// Creators are `Copy` and `const`-constructible, so each message kind is
/// normally declared once as a `static`.
pub struct MessageCreator<P> {
    message_type: MessageType,
    _payload: PhantomData<fn(P) -> P>,
}

impl<P> MessageCreator<P> {
    /// Bind a creator to `tag`.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            message_type: MessageType::new(tag),
            _payload: PhantomData,
        }
    }

    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// True iff `message` carries this creator's tag.
    #[must_use]
    pub fn matches(&self, message: &Message) -> bool {
        message.message_type == self.message_type
    }
}

impl<P: Any + Send + Sync> MessageCreator<P> {
    /// Build a message carrying `payload`. Pure; no side effects.
    #[must_use]
    pub fn create(&self, payload: P) -> Message {
        Message {
            message_type: self.message_type,
            payload: Arc::new(payload),
        }
    }

    /// Typed view of the payload if the tag matches and the payload is a `P`.
    #[must_use]
    pub fn extract<'a>(&self, message: &'a Message) -> Option<&'a P> {
        if !self.matches(message) {
            return None;
        }
        message.payload_as::<P>()
    }
}

impl<P> Clone for MessageCreator<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for MessageCreator<P> {}

impl<P> fmt::Debug for MessageCreator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MessageCreator")
            .field(&self.message_type.as_str())
            .finish()
    }
}

/// Define a new message kind for payload type `P`.
#[must_use]
pub const fn define_message<P>(tag: &'static str) -> MessageCreator<P> {
    MessageCreator::new(tag)
}
