use super::{init_file_logger, init_tracing_logger};
use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Fans each decision log line out to every attached sink, in order.
#[derive(Default)]
pub struct LogFanOut {
    sinks: Vec<DynLogger>,
}

impl LogFanOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: DynLogger) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn each(&self, write: impl Fn(&dyn DomainLogger)) {
        for sink in &self.sinks {
            write(sink.as_ref());
        }
    }
}

impl DomainLogger for LogFanOut {
    fn info(&self, msg: &str) {
        self.each(|sink| sink.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.each(|sink| sink.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.each(|sink| sink.error(msg));
    }
}

/// Landing decisions go to `path` and to tracing; tracing alone if the file
/// logger cannot be installed.
pub fn init_combined_logger(path: &str, level: log::LevelFilter) -> DynLogger {
    let console = init_tracing_logger();
    match init_file_logger(path, level) {
        Ok(file_logger) => Arc::new(
            LogFanOut::new()
                .with_sink(file_logger)
                .with_sink(console),
        ) as DynLogger,
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture {
        lines: Mutex<Vec<String>>,
    }

    impl DomainLogger for Capture {
        fn info(&self, msg: &str) {
            self.lines.lock().unwrap().push(format!("info {}", msg));
        }
        fn warn(&self, msg: &str) {
            self.lines.lock().unwrap().push(format!("warn {}", msg));
        }
        fn error(&self, msg: &str) {
            self.lines.lock().unwrap().push(format!("error {}", msg));
        }
    }

    #[test]
    fn test_every_sink_receives_each_line() {
        let (a, b) = (Arc::new(Capture::default()), Arc::new(Capture::default()));
        let fan_out = LogFanOut::new()
            .with_sink(a.clone())
            .with_sink(b.clone());
        assert_eq!(fan_out.len(), 2);

        fan_out.info("rocket landed");
        fan_out.warn("clash");
        fan_out.error("store down");

        let expected = vec!["info rocket landed", "warn clash", "error store down"];
        assert_eq!(*a.lines.lock().unwrap(), expected);
        assert_eq!(*b.lines.lock().unwrap(), expected);
    }

    #[test]
    fn test_without_sinks_nothing_happens() {
        let fan_out = LogFanOut::new();
        assert!(fan_out.is_empty());
        fan_out.warn("ignored");
    }
}
