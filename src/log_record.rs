//! Log record representation.
//!
//! A [`Record`] is an immutable snapshot of one log event: when it happened,
//! its severity, the message, and the ordered attributes attached to it.
//! Filters only ever borrow records.

use std::fmt;
use std::time::SystemTime;

use crate::level::Level;
use crate::value::{Attr, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    time: SystemTime,
    level: Level,
    message: String,
    attrs: Vec<Attr>,
}

impl Record {
    /// Construct a record stamped with the current system time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self::at(SystemTime::now(), level, message)
    }

    /// Construct a record with an explicit timestamp.
    pub fn at(time: SystemTime, level: Level, message: impl Into<String>) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_time(mut self, time: SystemTime) -> Self {
        self.time = time;
        self
    }

    /// Append one attribute after any existing ones.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// Append attributes in iteration order.
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn time(&self) -> SystemTime {
        self.time
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Top-level attributes in insertion order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Value of the first top-level attribute named `key`.
    ///
    /// The scan stops at the first match, so later attributes with the same
    /// key are never consulted.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.iter().find(|a| a.key == key).map(|a| &a.value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.level, self.message)
    }
}
