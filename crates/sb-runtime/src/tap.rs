//! Metrics tap: a module with a single catch-all listener that counts every
//! published message by tag.

use sb_telemetry::BUS_MESSAGES;
use shared_bus::{listener, EventSubscriber, Message, Module, ModuleError, Publisher, Subscriber};

/// Counts messages into `sb_bus_messages_total`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsTap;

impl Module for MetricsTap {
    fn name(&self) -> &'static str {
        "metrics-tap"
    }

    fn init(&self, _publisher: Publisher, subscriber: Subscriber) -> Result<(), ModuleError> {
        let _ = subscriber.subscribe(listener(|message: &Message| {
            BUS_MESSAGES
                .with_label_values(&[message.message_type().as_str()])
                .inc();
            Ok(())
        }));
        Ok(())
    }
}
