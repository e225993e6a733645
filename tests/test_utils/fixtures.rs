//! Fixtures that wire a filter in front of a text sink writing to memory.
//!
//! Records are stamped with the UNIX epoch so output lines are stable.

use std::sync::Arc;
use std::time::UNIX_EPOCH;

use femtofilter::{Filter, FilteringSink, Level, Logger, TextSink, test_utils::SharedBuf};

/// Build a logger whose records pass `filter` before reaching a text sink.
pub fn filtered_logger(filter: Filter) -> (SharedBuf, Logger) {
    let buffer = SharedBuf::default();
    let text = TextSink::new(buffer.clone(), Level::Debug);
    let sink = FilteringSink::new(Arc::new(text), filter);
    let logger = Logger::with_time_provider(Arc::new(sink), Arc::new(|| UNIX_EPOCH));
    (buffer, logger)
}
