//! Message predicates.

use regex::Regex;

use super::{FilterBuildError, compile};
use crate::filter::Filter;

/// Match records whose message is exactly `message`.
pub fn message_equals(message: impl Into<String>) -> Filter {
    let message = message.into();
    Filter::new(move |_, r| r.message() == message)
}

/// Match records whose message contains `substring`.
pub fn message_contains(substring: impl Into<String>) -> Filter {
    let substring = substring.into();
    Filter::new(move |_, r| r.message().contains(substring.as_str()))
}

/// Match records whose message matches the regular expression `pattern`.
///
/// The pattern is searched for anywhere in the message; anchor it with `^`
/// and `$` to require a whole-message match.
///
/// # Errors
///
/// Returns [`FilterBuildError::InvalidPattern`] when `pattern` does not
/// compile.
pub fn message_matches(pattern: &str) -> Result<Filter, FilterBuildError> {
    compile(pattern).map(message_matches_regex)
}

/// Like [`message_matches`] with an already compiled expression.
pub fn message_matches_regex(re: Regex) -> Filter {
    Filter::new(move |_, r| re.is_match(r.message()))
}
