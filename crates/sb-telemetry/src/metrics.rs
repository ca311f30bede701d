//! Prometheus metrics for Switchboard.
//!
//! All metrics follow the naming convention: `sb_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge,
    Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Messages published, by tag
    pub static ref BUS_MESSAGES: IntCounterVec = IntCounterVec::new(
        Opts::new("sb_bus_messages_total", "Messages published on the bus"),
        &["message_type"]
    ).expect("metric creation failed");

    /// Listeners registered on the bus after bootstrap
    pub static ref BUS_LISTENERS_ACTIVE: IntGauge = IntGauge::new(
        "sb_bus_listeners_active",
        "Listeners registered on the bus after bootstrap"
    ).expect("metric creation failed");

    pub static ref MODULES_INITIALIZED: IntCounter = IntCounter::new(
        "sb_modules_initialized_total",
        "Modules that completed initialization"
    ).expect("metric creation failed");

    pub static ref MODULES_FAILED: IntCounter = IntCounter::new(
        "sb_modules_failed_total",
        "Modules whose initialization failed"
    ).expect("metric creation failed");

    /// Wall time of a full bootstrap
    pub static ref BOOTSTRAP_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "sb_bootstrap_duration_seconds",
            "Time spent bootstrapping all modules"
        ).buckets(exponential_buckets(0.0001, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(BUS_MESSAGES.clone()),
        Box::new(BUS_LISTENERS_ACTIVE.clone()),
        Box::new(MODULES_INITIALIZED.clone()),
        Box::new(MODULES_FAILED.clone()),
        Box::new(BOOTSTRAP_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
