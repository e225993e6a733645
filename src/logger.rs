//! Front end that turns log calls into records.
//!
//! [`Logger`] checks the sink's level gate, stamps the record with the
//! current time and hands it to the sink. It is cheap to clone and scoping
//! returns a new logger over the scoped sink.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use crate::{
    context::Context,
    level::Level,
    log_record::Record,
    sink::{Sink, SinkError},
    value::Attr,
};

pub type TimeProvider = Arc<dyn Fn() -> SystemTime + Send + Sync>;

/// Returns the current system time.
pub fn system_time_provider() -> SystemTime {
    SystemTime::now()
}

#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
    time_provider: TimeProvider,
}

impl Logger {
    /// Create a logger stamping records with the system clock.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self::with_time_provider(sink, Arc::new(system_time_provider))
    }

    /// Create a logger with a custom clock.
    pub fn with_time_provider(sink: Arc<dyn Sink>, time_provider: TimeProvider) -> Self {
        Self {
            sink,
            time_provider,
        }
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.sink.enabled(ctx, level)
    }

    /// Build a record and hand it to the sink.
    ///
    /// Nothing is built when the sink reports `level` as disabled.
    pub fn log(
        &self,
        ctx: &Context,
        level: Level,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), SinkError> {
        if !self.sink.enabled(ctx, level) {
            return Ok(());
        }
        let record = Record::at((self.time_provider)(), level, message).with_attrs(attrs);
        self.sink.emit(ctx, record)
    }

    pub fn debug(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), SinkError> {
        self.log(&Context::background(), Level::Debug, message, attrs)
    }

    pub fn info(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), SinkError> {
        self.log(&Context::background(), Level::Info, message, attrs)
    }

    pub fn warn(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), SinkError> {
        self.log(&Context::background(), Level::Warn, message, attrs)
    }

    pub fn error(
        &self,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), SinkError> {
        self.log(&Context::background(), Level::Error, message, attrs)
    }

    /// Logger whose records always carry `attrs`.
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self {
            sink: self.sink.with_attrs(attrs.into_iter().collect()),
            time_provider: Arc::clone(&self.time_provider),
        }
    }

    /// Logger whose later attributes belong to group `name`.
    pub fn with_group(&self, name: &str) -> Self {
        Self {
            sink: self.sink.with_group(name),
            time_provider: Arc::clone(&self.time_provider),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CollectingSink;
    use std::time::{Duration, UNIX_EPOCH};

    fn fixed_clock(secs: u64) -> TimeProvider {
        Arc::new(move || UNIX_EPOCH + Duration::from_secs(secs))
    }

    #[test]
    fn stamps_records_with_the_clock() {
        let sink = CollectingSink::new();
        let logger = Logger::with_time_provider(Arc::new(sink.clone()), fixed_clock(5));
        logger
            .info("started", [Attr::new("port", 8080)])
            .expect("log should succeed");
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time(), UNIX_EPOCH + Duration::from_secs(5));
        assert_eq!(records[0].level(), Level::Info);
        assert_eq!(records[0].attrs(), &[Attr::new("port", 8080)]);
    }

    #[test]
    fn disabled_levels_never_reach_the_sink() {
        let sink = CollectingSink::new().with_min_level(Level::Info);
        let logger = Logger::new(Arc::new(sink.clone()));
        logger.debug("noise", []).expect("log should succeed");
        logger.warn("signal", []).expect("log should succeed");
        assert_eq!(sink.messages(), vec!["signal"]);
    }

    #[test]
    fn scoping_derives_new_sinks() {
        let sink = CollectingSink::new();
        let logger = Logger::new(Arc::new(sink.clone()))
            .with_attrs([Attr::new("service", "api")])
            .with_group("req");
        logger.error("failed", []).expect("log should succeed");
        let collected = sink.collected();
        assert_eq!(collected[0].attrs, vec![Attr::new("service", "api")]);
        assert_eq!(collected[0].groups, vec!["req".to_string()]);
    }
}
