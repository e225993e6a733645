//! Compatibility bridge for the Rust `log` crate.
//!
//! [`LogBridge`] implements `log::Log` and forwards every record through a
//! [`Logger`], so `log::info!` and friends pass through the same filtering
//! sinks as native calls. Nothing is installed globally unless
//! [`LogBridge::install`] is called.

use log::{Metadata, Record as LogRecord, SetLoggerError};

use crate::{context::Context, level::Level, logger::Logger, value::Attr};

/// Attribute key carrying the `log` target of bridged records.
pub const TARGET_KEY: &str = "target";

fn map_log_level(level: log::Level) -> Level {
    match level {
        log::Level::Trace => Level::Trace,
        log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warn,
        log::Level::Error => Level::Error,
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        map_log_level(level)
    }
}

/// Adapter implementing the Rust `log::Log` trait.
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Install the bridge as the global `log` logger.
    ///
    /// # Errors
    ///
    /// Fails when a different global logger is already set.
    pub fn install(self, max_level: log::LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger
            .enabled(&Context::background(), metadata.level().into())
    }

    fn log(&self, record: &LogRecord<'_>) {
        let attrs = [Attr::new(TARGET_KEY, record.target())];
        let result = self.logger.log(
            &Context::background(),
            record.level().into(),
            record.args().to_string(),
            attrs,
        );
        if let Err(err) = result {
            // Logging the failure through `log` would loop back here.
            eprintln!(
                "femtofilter: failed to emit record for target {:?}: {}",
                record.target(),
                err
            );
        }
    }

    fn flush(&self) {}
}
