//! Level comparisons.

use crate::{filter::Filter, level::Level};

/// Match records whose level is exactly `level`.
pub fn level_equals(level: Level) -> Filter {
    Filter::new(move |_, r| r.level() == level)
}

/// Match records at `level` or more severe.
pub fn level_at_least(level: Level) -> Filter {
    Filter::new(move |_, r| r.level() >= level)
}

/// Match records at `level` or less severe.
pub fn level_at_most(level: Level) -> Filter {
    Filter::new(move |_, r| r.level() <= level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::Context, log_record::Record};
    use rstest::rstest;

    fn record(level: Level) -> Record {
        Record::new(level, "msg")
    }

    fn eval(filter: Filter, level: Level) -> bool {
        filter.matches(&Context::background(), &record(level))
    }

    #[rstest]
    #[case(Level::Info, Level::Info, true)]
    #[case(Level::Info, Level::Warn, false)]
    #[case(Level::Error, Level::Debug, false)]
    fn equals(#[case] threshold: Level, #[case] actual: Level, #[case] expected: bool) {
        assert_eq!(eval(level_equals(threshold), actual), expected);
    }

    #[rstest]
    #[case(Level::Warn, Level::Info, false)]
    #[case(Level::Warn, Level::Warn, true)]
    #[case(Level::Warn, Level::Error, true)]
    fn at_least(#[case] threshold: Level, #[case] actual: Level, #[case] expected: bool) {
        assert_eq!(eval(level_at_least(threshold), actual), expected);
    }

    #[rstest]
    #[case(Level::Warn, Level::Info, true)]
    #[case(Level::Warn, Level::Warn, true)]
    #[case(Level::Warn, Level::Error, false)]
    fn at_most(#[case] threshold: Level, #[case] actual: Level, #[case] expected: bool) {
        assert_eq!(eval(level_at_most(threshold), actual), expected);
    }
}
