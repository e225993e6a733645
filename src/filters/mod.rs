//! Built-in predicates over log records.
//!
//! Each constructor returns a [`Filter`](crate::Filter) closed over its
//! configuration. Pattern-based constructors compile their pattern up front
//! and report a [`FilterBuildError`] instead of failing later.

use thiserror::Error;

pub mod attr;
pub mod level;
pub mod message;
pub mod time;

pub use attr::{attr_contains, attr_equals, attr_exists, attr_matches, attr_matches_regex};
pub use level::{level_at_least, level_at_most, level_equals};
pub use message::{message_contains, message_equals, message_matches, message_matches_regex};
pub use time::{time_after, time_before, time_between};

/// Errors that may occur while building a filter.
#[derive(Debug, Error)]
pub enum FilterBuildError {
    /// A regular expression failed to compile.
    #[error("invalid filter pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub(crate) fn compile(pattern: &str) -> Result<regex::Regex, FilterBuildError> {
    regex::Regex::new(pattern).map_err(|source| FilterBuildError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}
