//! Declarative filter configuration.
//!
//! A [`FilterConfig`] mirrors every predicate and combinator as plain data,
//! so a filter tree can be loaded from JSON at start-up and compiled once.

mod build;
mod types;

pub use build::filter_from_json;
pub use types::{ConfigError, FilterConfig, ScalarValue};
