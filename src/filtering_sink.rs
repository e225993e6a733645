//! Sink decorator that drops records matched by a filter.
//!
//! [`FilteringSink`] sits in front of another [`Sink`]. Every emitted record
//! is first run through the filter: matches are dropped and reported as
//! delivered, everything else is forwarded untouched. Level enablement and
//! scoping are the wrapped sink's business and pass straight through.

use std::sync::Arc;

use delegate::delegate;

use crate::{
    context::Context,
    filter::Filter,
    level::Level,
    log_record::Record,
    sink::{Sink, SinkError},
    value::Attr,
};

#[derive(Clone)]
pub struct FilteringSink {
    inner: Arc<dyn Sink>,
    filter: Filter,
}

impl FilteringSink {
    /// Wrap `inner` so records matched by `filter` never reach it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use std::sync::Arc;
    ///
    /// use femtofilter::{FilteringSink, Level, TextSink, filters::level_at_most};
    ///
    /// let stderr = Arc::new(TextSink::new(io::stderr(), Level::Debug));
    /// let sink = FilteringSink::new(stderr, level_at_most(Level::Info));
    /// # let _ = sink;
    /// ```
    pub fn new(inner: Arc<dyn Sink>, filter: Filter) -> Self {
        Self { inner, filter }
    }

    /// The filter shared by this sink and every sink derived from it.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    fn derive(&self, inner: Arc<dyn Sink>) -> Arc<dyn Sink> {
        Arc::new(Self {
            inner,
            filter: self.filter.clone(),
        })
    }
}

impl Sink for FilteringSink {
    delegate! {
        to self.inner {
            fn enabled(&self, ctx: &Context, level: Level) -> bool;
        }
    }

    fn emit(&self, ctx: &Context, record: Record) -> Result<(), SinkError> {
        if self.filter.matches(ctx, &record) {
            return Ok(());
        }
        self.inner.emit(ctx, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink> {
        self.derive(self.inner.with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Sink> {
        self.derive(self.inner.with_group(name))
    }
}

impl std::fmt::Debug for FilteringSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteringSink")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
