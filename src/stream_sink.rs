//! Stream-based text sink.
//!
//! [`TextSink`] formats each record with [`TextFormatter`] and writes it to an
//! `io::Write` stream while holding a lock, so lines from concurrent callers
//! never interleave. Output is synchronous and flushed per record.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    context::Context,
    formatter::TextFormatter,
    level::Level,
    log_record::Record,
    sink::{Sink, SinkError},
    value::Attr,
};

pub struct TextSink<W> {
    writer: Arc<Mutex<W>>,
    level: Level,
    formatter: TextFormatter,
    bound: String,
    prefix: String,
}

impl TextSink<io::Stdout> {
    /// Create a sink writing to `stdout`.
    pub fn stdout(level: Level) -> Self {
        Self::new(io::stdout(), level)
    }
}

impl TextSink<io::Stderr> {
    /// Create a sink writing to `stderr`.
    pub fn stderr(level: Level) -> Self {
        Self::new(io::stderr(), level)
    }
}

impl<W> TextSink<W>
where
    W: Write + Send + 'static,
{
    /// Create a sink writing to `writer`, enabled for `level` and above.
    pub fn new(writer: W, level: Level) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            level,
            formatter: TextFormatter,
            bound: String::new(),
            prefix: String::new(),
        }
    }
}

impl<W> Clone for TextSink<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            level: self.level,
            formatter: self.formatter,
            bound: self.bound.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

impl<W> Sink for TextSink<W>
where
    W: Write + Send + 'static,
{
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.level
    }

    fn emit(&self, ctx: &Context, record: Record) -> Result<(), SinkError> {
        if ctx.is_cancelled() {
            return Err(SinkError::Cancelled);
        }
        let line = self.formatter.format(&record, &self.bound, &self.prefix);
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink> {
        let mut derived = self.clone();
        let rendered = self.formatter.format_attrs(&self.prefix, &attrs);
        if !rendered.is_empty() {
            if !derived.bound.is_empty() {
                derived.bound.push(' ');
            }
            derived.bound.push_str(&rendered);
        }
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Sink> {
        let mut derived = self.clone();
        if !name.is_empty() {
            derived.prefix.push_str(name);
            derived.prefix.push('.');
        }
        Arc::new(derived)
    }
}
