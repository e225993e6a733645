//! Timestamp predicates.

use std::time::SystemTime;

use crate::filter::Filter;

/// Match records stamped strictly after `time`.
pub fn time_after(time: SystemTime) -> Filter {
    Filter::new(move |_, r| r.time() > time)
}

/// Match records stamped strictly before `time`.
pub fn time_before(time: SystemTime) -> Filter {
    Filter::new(move |_, r| r.time() < time)
}

/// Match records stamped within `[start, end]`, both bounds included.
pub fn time_between(start: SystemTime, end: SystemTime) -> Filter {
    Filter::new(move |_, r| start <= r.time() && r.time() <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::Context, level::Level, log_record::Record};
    use rstest::rstest;
    use std::time::{Duration, UNIX_EPOCH};

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn eval(filter: &Filter, secs: u64) -> bool {
        filter.matches(&Context::background(), &Record::at(at(secs), Level::Info, ""))
    }

    #[rstest]
    #[case(100, false)]
    #[case(99, false)]
    #[case(101, true)]
    fn after(#[case] record: u64, #[case] expected: bool) {
        assert_eq!(eval(&time_after(at(100)), record), expected);
    }

    #[rstest]
    #[case(100, false)]
    #[case(99, true)]
    #[case(101, false)]
    fn before(#[case] record: u64, #[case] expected: bool) {
        assert_eq!(eval(&time_before(at(100)), record), expected);
    }

    #[rstest]
    #[case(99, false)]
    #[case(100, true)]
    #[case(150, true)]
    #[case(200, true)]
    #[case(201, false)]
    fn between_is_inclusive(#[case] record: u64, #[case] expected: bool) {
        assert_eq!(eval(&time_between(at(100), at(200)), record), expected);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let filter = time_between(at(200), at(100));
        assert!(!eval(&filter, 150));
    }
}
