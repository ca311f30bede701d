//! # SB Telemetry
//!
//! Logging and metrics for Switchboard processes.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters and gauges in a process-wide registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sb_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Your application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SB_SERVICE_NAME` | `switchboard` | Service name in logs |
//! | `SB_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honored) |
//! | `SB_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `SB_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    gather_metrics, register_metrics, HistogramTimer, BOOTSTRAP_DURATION, BUS_LISTENERS_ACTIVE,
    BUS_MESSAGES, MODULES_FAILED, MODULES_INITIALIZED,
};
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and register metrics.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    // Initialize metrics first (no dependencies)
    register_metrics()?;

    init_tracing(config)
}
