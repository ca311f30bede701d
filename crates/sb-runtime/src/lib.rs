//! # Switchboard Runtime Library
//!
//! This library exposes the internals of the runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Layout
//!
//! - `registry/` - Known module identifiers and their dependencies
//! - `container/` - Runtime configuration and module instantiation
//! - `tap` - Catch-all listener feeding the message counter
//! - `session` - Scripted session replay
//! - `runtime` - Startup sequence and state reporting

pub mod container;
pub mod registry;
pub mod runtime;
pub mod session;
pub mod tap;

pub use container::{ConfigError, ModuleContainer, RuntimeConfig};
pub use registry::ModuleId;
pub use runtime::{RuntimeError, SwitchboardRuntime};
pub use session::{load_session, replay, SessionError, SessionReport, SessionStep};
pub use tap::MetricsTap;
