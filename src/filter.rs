//! The filter type and its boolean combinators.
//!
//! A [`Filter`] answers one question about a record: should it be
//! suppressed? `true` means drop, `false` means keep. Filters compose with
//! [`and`], [`or`] and [`not`] (or the `&`, `|` and `!` operators) into
//! trees that are built once and shared freely between threads.

use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::{context::Context, log_record::Record};

type FilterFn = dyn Fn(&Context, &Record) -> bool + Send + Sync;

/// Shared handle to a suppression predicate.
///
/// Cloning is cheap and keeps pointing at the same predicate, see
/// [`Filter::ptr_eq`].
#[derive(Clone)]
pub struct Filter(Arc<FilterFn>);

impl Filter {
    /// Wrap a closure as a filter.
    ///
    /// The closure must only capture immutable state; it may be called
    /// concurrently for different records.
    ///
    /// # Examples
    ///
    /// ```
    /// use femtofilter::{Context, Filter, Level, Record};
    ///
    /// let quiet = Filter::new(|_, r: &Record| r.message().is_empty());
    /// assert!(quiet.matches(&Context::background(), &Record::new(Level::Info, "")));
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Context, &Record) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluate the filter. `true` means the record should be suppressed.
    #[inline]
    pub fn matches(&self, ctx: &Context, record: &Record) -> bool {
        (self.0)(ctx, record)
    }

    /// Whether two handles share the same underlying predicate.
    pub fn ptr_eq(a: &Filter, b: &Filter) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Match when every child matches.
///
/// Children run in order and evaluation stops at the first one that does not
/// match. With no children the result is always `true`.
pub fn and(filters: impl IntoIterator<Item = Filter>) -> Filter {
    let filters: Vec<Filter> = filters.into_iter().collect();
    Filter::new(move |ctx, record| filters.iter().all(|f| f.matches(ctx, record)))
}

/// Match when any child matches.
///
/// Children run in order and evaluation stops at the first match. With no
/// children the result is always `false`.
pub fn or(filters: impl IntoIterator<Item = Filter>) -> Filter {
    let filters: Vec<Filter> = filters.into_iter().collect();
    Filter::new(move |ctx, record| filters.iter().any(|f| f.matches(ctx, record)))
}

/// Negate `filter`.
pub fn not(filter: Filter) -> Filter {
    Filter::new(move |ctx, record| !filter.matches(ctx, record))
}

impl ops::BitAnd for Filter {
    type Output = Filter;

    fn bitand(self, rhs: Filter) -> Filter {
        and([self, rhs])
    }
}

impl ops::BitOr for Filter {
    type Output = Filter;

    fn bitor(self, rhs: Filter) -> Filter {
        or([self, rhs])
    }
}

impl ops::Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        not(self)
    }
}
