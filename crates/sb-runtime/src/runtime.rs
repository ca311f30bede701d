//! The running system: one bus plus the modules bootstrapped onto it.

use sb_01_auth::AuthHandle;
use sb_02_catalog::CatalogHandle;
use sb_telemetry::{
    log_event, register_metrics, time_histogram, TelemetryError, BOOTSTRAP_DURATION,
    BUS_LISTENERS_ACTIVE, MODULES_FAILED, MODULES_INITIALIZED,
};
use shared_bus::{BootstrapError, Bus};
use thiserror::Error;
use tracing::{error, info};

use crate::container::{ConfigError, ModuleContainer, RuntimeConfig};
use crate::registry::ModuleId;
use crate::session::{replay, SessionReport, SessionStep};

/// Errors starting the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// A bootstrapped Switchboard instance.
pub struct SwitchboardRuntime {
    container: ModuleContainer,
    bus: Bus,
}

impl SwitchboardRuntime {
    /// Validate `config`, build its modules and bootstrap them.
    ///
    /// ## Startup Sequence
    ///
    /// 1. Validate the module list
    /// 2. Register metrics
    /// 3. Build modules in configured order, metrics tap first
    /// 4. Bootstrap onto a fresh bus
    pub fn start(config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        register_metrics()?;

        let container = ModuleContainer::new(&config.modules);
        info!(modules = ?container.names(), "Bootstrapping modules");

        let result = {
            let _timer = time_histogram!(BOOTSTRAP_DURATION);
            container.bootstrap()
        };

        match result {
            Ok(bus) => {
                MODULES_INITIALIZED.inc_by(container.ids().len() as u64);
                BUS_LISTENERS_ACTIVE.set(bus.listener_count() as i64);
                Ok(Self { container, bus })
            }
            Err(e) => {
                let BootstrapError::ModuleFailed { position, .. } = &e;
                // Position 0 is the tap
                MODULES_INITIALIZED.inc_by(position.saturating_sub(1) as u64);
                MODULES_FAILED.inc();
                error!(error = %e, "Bootstrap failed");
                Err(e.into())
            }
        }
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn auth(&self) -> Option<&AuthHandle> {
        self.container.auth()
    }

    pub fn catalog(&self) -> Option<&CatalogHandle> {
        self.container.catalog()
    }

    /// Publish a scripted session on the bus.
    pub fn replay(&self, steps: &[SessionStep]) -> SessionReport {
        let report = replay(&self.bus, steps);
        info!(
            applied = report.applied,
            rejected = report.rejected.len(),
            "Session replayed"
        );
        report
    }

    /// Log what each module currently holds.
    pub fn log_state(&self) {
        info!(
            listeners = self.bus.listener_count(),
            messages = self.bus.messages_published(),
            "Bus state"
        );
        if let Some(auth) = self.auth() {
            let user = auth.current_user();
            log_event!(
                info,
                ModuleId::Auth.name(),
                "Module state",
                logged_in = auth.is_logged_in(),
                user = user.as_deref().unwrap_or("-")
            );
        }
        if let Some(catalog) = self.catalog() {
            log_event!(
                info,
                ModuleId::Catalog.name(),
                "Module state",
                logged_in = catalog.is_logged_in(),
                products = catalog.products().len()
            );
        }
    }
}
