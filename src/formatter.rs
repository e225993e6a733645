//! Key/value text rendering for log records.
//!
//! Produces lines such as
//! `time=1970-01-01T00:00:00.000Z level=INFO msg="Authenticated user" user_id=user_123`.
//! Attributes inside groups are flattened with dotted keys.

use std::borrow::Cow;
use std::time::SystemTime;

use chrono::SecondsFormat;

use crate::{
    log_record::Record,
    value::{Attr, Value, to_utc},
};

#[derive(Copy, Clone, Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Render `record` as one newline-terminated line.
    ///
    /// `bound` holds attributes already rendered by [`Self::format_attrs`];
    /// `prefix` qualifies the record's own attribute keys.
    pub fn format(&self, record: &Record, bound: &str, prefix: &str) -> String {
        let mut line = String::with_capacity(64 + bound.len());
        push_pair(&mut line, "time", &render_time(record.time()));
        push_pair(&mut line, "level", record.level().as_str());
        push_pair(&mut line, "msg", record.message());
        if !bound.is_empty() {
            line.push(' ');
            line.push_str(bound);
        }
        for attr in record.attrs() {
            write_attr(&mut line, prefix, attr);
        }
        line.push('\n');
        line
    }

    /// Render attributes ahead of time so scoped sinks do it only once.
    pub fn format_attrs(&self, prefix: &str, attrs: &[Attr]) -> String {
        let mut out = String::new();
        for attr in attrs {
            write_attr(&mut out, prefix, attr);
        }
        out
    }
}

fn render_time(time: SystemTime) -> String {
    match to_utc(time) {
        Some(utc) => utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => format!("{time:?}"),
    }
}

fn write_attr(out: &mut String, prefix: &str, attr: &Attr) {
    match &attr.value {
        Value::Group(children) => {
            let nested = format!("{prefix}{}.", attr.key);
            for child in children {
                write_attr(out, &nested, child);
            }
        }
        Value::Time(t) => push_pair(out, &format!("{prefix}{}", attr.key), &render_time(*t)),
        value => push_pair(out, &format!("{prefix}{}", attr.key), &value.render()),
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(key);
    out.push('=');
    out.push_str(&quote(value));
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"')
}

fn quote(value: &str) -> Cow<'_, str> {
    if needs_quoting(value) {
        Cow::Owned(format!("{value:?}"))
    } else {
        Cow::Borrowed(value)
    }
}
