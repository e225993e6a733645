//! Serialisable description of a filter tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{filters::FilterBuildError, level::Level, value::Value};

/// One node of a filter tree.
///
/// The JSON form is internally tagged by `"type"`:
///
/// ```json
/// {"type": "and", "filters": [
///     {"type": "level_at_most", "level": "WARN"},
///     {"type": "not", "filter": {"type": "attr_exists", "key": "latency_ms"}}
/// ]}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    And { filters: Vec<FilterConfig> },
    Or { filters: Vec<FilterConfig> },
    Not { filter: Box<FilterConfig> },
    LevelEquals { level: Level },
    LevelAtLeast { level: Level },
    LevelAtMost { level: Level },
    MessageEquals { message: String },
    MessageContains { substring: String },
    MessageMatches { pattern: String },
    AttrEquals { key: String, value: ScalarValue },
    AttrContains { key: String, substring: String },
    AttrMatches { key: String, pattern: String },
    AttrExists { key: String },
    TimeAfter { time: DateTime<Utc> },
    TimeBefore { time: DateTime<Utc> },
    TimeBetween { start: DateTime<Utc>, end: DateTime<Utc> },
}

/// Scalar accepted as the expected value of `attr_equals`.
///
/// Integers that fit `i64` become [`Value::Int`], larger ones
/// [`Value::Uint`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Bool(v) => Value::Bool(v),
            ScalarValue::Int(v) => Value::Int(v),
            ScalarValue::Uint(v) => Value::Uint(v),
            ScalarValue::Float(v) => Value::Float(v),
            ScalarValue::String(v) => Value::String(v),
        }
    }
}

/// Errors that may occur while loading a filter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a valid filter description.
    #[error("failed to parse filter configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A node of the tree could not be built.
    #[error("failed to build filter: {0}")]
    Build(#[from] FilterBuildError),
}
