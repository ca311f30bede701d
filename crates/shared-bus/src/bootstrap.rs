//! # Bootstrap
//!
//! Composition root: creates one bus and initializes modules against it,
//! strictly in list order.
//!
//! Initialization order is observable. A module's init-time publish reaches
//! listeners registered by modules before it, never by modules after it.

use crate::error::BootstrapError;
use crate::module::{Module, Publisher, Subscriber};
use crate::publisher::Bus;
use tracing::{error, info};

/// Create a bus and initialize `modules` on it, in order.
///
/// Returns the bus so the host can keep publishing on it.
///
/// # Errors
///
/// The first module that fails stops bootstrap; modules after it are never
/// initialized and already-initialized modules are not rolled back.
#[must_use = "dropping the bus disconnects every module"]
pub fn bootstrap(modules: &[&dyn Module]) -> Result<Bus, BootstrapError> {
    let bus = Bus::new();

    for (position, module) in modules.iter().enumerate() {
        let name = module.name();
        info!(module = name, position, "Initializing module");

        if let Err(source) = module.init(Publisher::new(&bus), Subscriber::new(&bus)) {
            error!(module = name, position, error = %source, "Module initialization failed");
            return Err(BootstrapError::ModuleFailed {
                module: name,
                position,
                source,
            });
        }
    }

    info!(
        modules = modules.len(),
        listeners = bus.listener_count(),
        "Bootstrap complete"
    );

    Ok(bus)
}
