//! The capability every log-writing backend provides.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::{context::Context, level::Level, log_record::Record, value::Attr};

/// Errors a sink may report when emitting a record.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink no longer accepts records.
    #[error("sink is closed")]
    Closed,
    /// The caller's context was cancelled before the record was written.
    #[error("operation cancelled")]
    Cancelled,
    /// Writing to the underlying stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Any other backend-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Trait implemented by all log sinks.
///
/// Sinks are `Send + Sync` so a single instance can be shared by many
/// threads. Scoping operations return new sinks rather than mutating
/// `self`.
pub trait Sink: Send + Sync {
    /// Whether records at `level` are wanted at all.
    fn enabled(&self, ctx: &Context, level: Level) -> bool;

    /// Deliver a finalised record.
    fn emit(&self, ctx: &Context, record: Record) -> Result<(), SinkError>;

    /// Derive a sink that attaches `attrs` to every later record.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink>;

    /// Derive a sink that qualifies later attributes with group `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Sink>;
}
