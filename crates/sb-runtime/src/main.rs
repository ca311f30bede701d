//! # Switchboard Runtime
//!
//! Bootstraps the configured modules onto one bus, optionally replays a
//! session script, logs the resulting state and exits.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging and metrics (`SB_LOG_LEVEL`, `SB_JSON_LOGS`, ...)
//! 2. Load configuration (`SB_CONFIG`, `SB_MODULES`, `SB_SESSION`)
//! 3. Bootstrap modules in configured order
//! 4. Replay the session script, if any
//! 5. Log module state and metrics

use anyhow::{Context, Result};
use sb_runtime::{load_session, RuntimeConfig, SwitchboardRuntime};
use sb_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry).context("Failed to initialize telemetry")?;

    info!("===========================================");
    info!("  Switchboard Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let config = RuntimeConfig::load().context("Failed to load runtime configuration")?;
    let runtime = SwitchboardRuntime::start(&config).context("Failed to bootstrap modules")?;

    if let Some(path) = &config.session {
        let steps = load_session(path)
            .with_context(|| format!("Failed to load session {}", path.display()))?;
        info!(steps = steps.len(), path = %path.display(), "Replaying session");
        let report = runtime.replay(&steps);
        if !report.rejected.is_empty() {
            warn!(rejected = report.rejected.len(), "Session finished with rejected steps");
        }
    }

    runtime.log_state();

    match gather_metrics() {
        Ok(text) => debug!("Metrics:\n{}", text),
        Err(e) => warn!(error = %e, "Could not gather metrics"),
    }

    info!("Shutdown complete");
    Ok(())
}
