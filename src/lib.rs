//! Composable record filters for structured logging.
//!
//! Build a [`Filter`] from the predicates in [`filters`] and the
//! [`and`]/[`or`]/[`not`] combinators, then place a [`FilteringSink`] in
//! front of any [`Sink`]. Records the filter matches are dropped; everything
//! else reaches the wrapped sink untouched.

pub mod config;
pub mod context;
pub mod filter;
pub mod filtering_sink;
pub mod filters;
pub mod formatter;
pub mod level;
#[cfg(feature = "log-compat")]
pub mod log_compat;
pub mod log_record;
pub mod logger;
pub mod sink;
pub mod stream_sink;
#[cfg(any(test, feature = "test-util"))]
pub mod test_utils;
pub mod value;

pub use config::{ConfigError, FilterConfig, filter_from_json};
pub use context::Context;
pub use filter::{Filter, and, not, or};
pub use filtering_sink::FilteringSink;
pub use filters::FilterBuildError;
pub use formatter::TextFormatter;
pub use level::{Level, ParseLevelError};
#[cfg(feature = "log-compat")]
pub use log_compat::LogBridge;
pub use log_record::Record;
pub use logger::{Logger, TimeProvider};
pub use sink::{Sink, SinkError};
pub use stream_sink::TextSink;
pub use value::{Attr, Value};
