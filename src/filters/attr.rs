//! Attribute predicates.
//!
//! All of these look up the first top-level attribute with the requested
//! key. A record without that key never matches. Substring and pattern tests
//! work on the value's canonical rendering (see [`Value::render`]).

use regex::Regex;

use super::{FilterBuildError, compile};
use crate::{filter::Filter, value::Value};

fn if_attr<F>(key: String, test: F) -> Filter
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Filter::new(move |_, r| r.attr(&key).is_some_and(&test))
}

/// Match records whose `key` attribute equals `value`.
///
/// Comparison is structural, so an `i64` never equals the string holding
/// the same digits.
pub fn attr_equals(key: impl Into<String>, value: impl Into<Value>) -> Filter {
    let value = value.into();
    if_attr(key.into(), move |v| *v == value)
}

/// Match records whose `key` attribute renders to a string containing
/// `substring`.
pub fn attr_contains(key: impl Into<String>, substring: impl Into<String>) -> Filter {
    let substring = substring.into();
    if_attr(key.into(), move |v| v.render().contains(substring.as_str()))
}

/// Match records whose `key` attribute renders to a string matching
/// `pattern`.
///
/// # Errors
///
/// Returns [`FilterBuildError::InvalidPattern`] when `pattern` does not
/// compile.
pub fn attr_matches(key: impl Into<String>, pattern: &str) -> Result<Filter, FilterBuildError> {
    let re = compile(pattern)?;
    Ok(attr_matches_regex(key, re))
}

/// Like [`attr_matches`] with an already compiled expression.
pub fn attr_matches_regex(key: impl Into<String>, re: Regex) -> Filter {
    if_attr(key.into(), move |v| re.is_match(&v.render()))
}

/// Match records carrying an attribute named `key`.
pub fn attr_exists(key: impl Into<String>) -> Filter {
    if_attr(key.into(), |_| true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::Context, level::Level, log_record::Record, value::Attr};
    use rstest::rstest;

    fn eval(filter: &Filter, attrs: Vec<Attr>) -> bool {
        let record = Record::new(Level::Info, "").with_attrs(attrs);
        filter.matches(&Context::background(), &record)
    }

    #[rstest]
    #[case(vec![Attr::new("FOO", "BAZ")], false)]
    #[case(vec![Attr::new("FOO", "BAR")], true)]
    #[case(vec![Attr::new("BAR", "BAZ")], false)]
    fn equals(#[case] attrs: Vec<Attr>, #[case] expected: bool) {
        assert_eq!(eval(&attr_equals("FOO", "BAR"), attrs), expected);
    }

    #[rstest]
    #[case(vec![Attr::new("FOO", "successful")], false)]
    #[case(vec![Attr::new("FOO", "failed")], true)]
    #[case(vec![Attr::new("BAR", "failed")], false)]
    fn contains(#[case] attrs: Vec<Attr>, #[case] expected: bool) {
        assert_eq!(eval(&attr_contains("FOO", "fail"), attrs), expected);
    }

    #[rstest]
    #[case(vec![Attr::new("FOO", "admin-123")], false)]
    #[case(vec![Attr::new("FOO", "user-123")], true)]
    #[case(vec![Attr::new("BAR", "user-123")], false)]
    fn matches(#[case] attrs: Vec<Attr>, #[case] expected: bool) {
        let filter = attr_matches("FOO", r"^user-\d+$").expect("pattern should compile");
        assert_eq!(eval(&filter, attrs), expected);
    }

    #[rstest]
    #[case(vec![Attr::new("BAR", "BAZ")], false)]
    #[case(vec![Attr::new("FOO", "BAR")], true)]
    #[case(vec![], false)]
    fn exists(#[case] attrs: Vec<Attr>, #[case] expected: bool) {
        assert_eq!(eval(&attr_exists("FOO"), attrs), expected);
    }

    #[test]
    fn numeric_values_compare_and_render() {
        let attrs = || vec![Attr::new("latency_ms", 250)];
        assert!(eval(&attr_exists("latency_ms"), attrs()));
        assert!(!eval(&attr_exists("missing"), attrs()));
        assert!(eval(&attr_equals("latency_ms", 250), attrs()));
        assert!(!eval(&attr_equals("latency_ms", "250"), attrs()));
        assert!(eval(&attr_contains("latency_ms", "25"), attrs()));
        let slow = attr_matches("latency_ms", r"^\d{3,}$").expect("pattern should compile");
        assert!(eval(&slow, attrs()));
    }

    #[test]
    fn out_of_range_time_values_are_searchable() {
        let far = std::time::UNIX_EPOCH + std::time::Duration::from_secs(1 << 60);
        let attrs = vec![Attr::new("deadline", far)];
        assert!(!eval(&attr_contains("deadline", "9999"), attrs.clone()));
        assert!(eval(&attr_contains("deadline", "SystemTime"), attrs));
    }

    #[test]
    fn first_occurrence_wins() {
        let attrs = || vec![Attr::new("user", "alice"), Attr::new("user", "bob")];
        assert!(eval(&attr_equals("user", "alice"), attrs()));
        assert!(!eval(&attr_equals("user", "bob"), attrs()));
    }

    #[test]
    fn groups_compare_deeply() {
        let group = || Attr::group("peer", [Attr::new("ip", "10.0.0.1"), Attr::new("port", 443)]);
        let expected = vec![Attr::new("ip", "10.0.0.1"), Attr::new("port", 443)];
        assert!(eval(&attr_equals("peer", expected), vec![group()]));
        assert!(eval(&attr_contains("peer", "port=443"), vec![group()]));
    }

    #[test]
    fn malformed_pattern_fails_at_construction() {
        assert!(attr_matches("ip", "[").is_err());
    }
}
