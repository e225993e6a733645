//! A simple sink that accumulates records in memory for test assertions.
//!
//! This module is shared by the unit tests and, through the `test-util`
//! feature, by the integration tests so that each of them does not need its
//! own copy of the same boilerplate.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    context::Context,
    level::Level,
    log_record::Record,
    sink::{Sink, SinkError},
    value::Attr,
};

/// A record as received, together with the scope it was emitted under.
#[derive(Clone, Debug, PartialEq)]
pub struct Collected {
    pub record: Record,
    /// Attributes bound through [`Sink::with_attrs`], oldest first.
    pub attrs: Vec<Attr>,
    /// Groups entered through [`Sink::with_group`], outermost first.
    pub groups: Vec<String>,
}

/// Sink that stores every record it receives for later inspection.
///
/// Clones and derived sinks share the same storage.
#[derive(Clone)]
pub struct CollectingSink {
    records: Arc<Mutex<Vec<Collected>>>,
    attrs: Vec<Attr>,
    groups: Vec<String>,
    min_level: Level,
    fail_with: Option<String>,
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self {
            records: Arc::default(),
            attrs: Vec::new(),
            groups: Vec::new(),
            min_level: Level::Trace,
            fail_with: None,
        }
    }
}

impl CollectingSink {
    /// Create a new empty sink accepting every level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report only `level` and above as enabled.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Reject every emitted record with `SinkError::Other(message)`.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Return a snapshot of everything received so far.
    pub fn collected(&self) -> Vec<Collected> {
        self.records.lock().clone()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().iter().map(|c| c.record.clone()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|c| c.record.message().to_owned())
            .collect()
    }
}

impl Sink for CollectingSink {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.min_level
    }

    fn emit(&self, ctx: &Context, record: Record) -> Result<(), SinkError> {
        if ctx.is_cancelled() {
            return Err(SinkError::Cancelled);
        }
        if let Some(message) = &self.fail_with {
            return Err(SinkError::Other(message.clone()));
        }
        self.records.lock().push(Collected {
            record,
            attrs: self.attrs.clone(),
            groups: self.groups.clone(),
        });
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink> {
        let mut derived = self.clone();
        derived.attrs.extend(attrs);
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Sink> {
        let mut derived = self.clone();
        derived.groups.push(name.to_owned());
        Arc::new(derived)
    }
}
