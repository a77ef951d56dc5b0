use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Drops every line; for tests and headless runs.
pub struct SilentLogger;

impl DomainLogger for SilentLogger {
    fn info(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn error(&self, _: &str) {}
}

pub fn init_noop_logger() -> DynLogger {
    Arc::new(SilentLogger)
}
