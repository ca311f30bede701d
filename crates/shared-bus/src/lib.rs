//! # Shared Bus - Message Bus for Inter-Module Communication
//!
//! A synchronous, in-process publish/subscribe bus that lets independently
//! defined modules talk without referencing each other.
//!
//! ## Rules
//!
//! - Modules communicate through the bus ONLY
//! - Each module gets its capabilities once, at bootstrap
//! - Delivery is synchronous: `publish` returns after every listener ran
//! - The host's [`Bus`] owns the listeners; module capabilities do not keep it alive
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │   Module A   │                    │   Module B   │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │     Bus      │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Example
//!
//! ```
//! use shared_bus::{bootstrap, define_message, module_fn, on, MessageCreator};
//! use shared_bus::{EventPublisher, EventSubscriber};
//!
//! static GREET: MessageCreator<String> = define_message("greet");
//!
//! let greeter = module_fn("greeter", |_, sub| {
//!     let _ = sub.subscribe(on(GREET, |name: &String| {
//!         println!("hello {name}");
//!         Ok(())
//!     }));
//!     Ok(())
//! });
//! let caller = module_fn("caller", |publisher, _| {
//!     publisher.publish(&GREET.create("world".to_string()))?;
//!     Ok(())
//! });
//!
//! let bus = bootstrap(&[&greeter, &caller]).expect("bootstrap");
//! assert_eq!(bus.listener_count(), 1);
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod bootstrap;
pub mod error;
pub mod message;
pub mod module;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use bootstrap::bootstrap;
pub use error::{BootstrapError, BusError, ListenerError, ModuleError};
pub use message::{define_message, Message, MessageCreator, MessageType, Payload};
pub use module::{module_fn, FnModule, Module, Publisher, Subscriber};
pub use publisher::{Bus, EventPublisher};
pub use subscriber::{listener, on, EventSubscriber, Listener, Unsubscribe};
