use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards domain log lines to the `tracing` subscriber installed by the binary.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) {
        tracing::info!(target: "landing", "{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "landing", "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "landing", "{}", msg);
    }
}

pub fn init_tracing_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge)
}
