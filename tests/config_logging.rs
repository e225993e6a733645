//! Setup-time logging emitted while building filters from configuration.
//!
//! Lives in its own test binary because `logtest` installs a global logger.

use femtofilter::{ConfigError, FilterConfig, filter_from_json};
use logtest::Logger;

#[test]
fn build_reports_rejected_patterns_and_successes() {
    let mut logger = Logger::start();

    let err = filter_from_json(r#"{"type": "attr_matches", "key": "ip", "pattern": "["}"#)
        .expect_err("pattern should be rejected");
    assert!(matches!(err, ConfigError::Build(_)));
    let record = logger.pop().expect("warning should be logged");
    assert_eq!(record.level(), log::Level::Warn);
    assert!(record.args().contains("rejecting filter configuration"));
    assert!(logger.pop().is_none());

    let config = FilterConfig::from_json(r#"{"type": "not", "filter": {"type": "attr_exists", "key": "ip"}}"#)
        .expect("parse should succeed");
    config.build().expect("build should succeed");
    let record = logger.pop().expect("debug message should be logged");
    assert_eq!(record.level(), log::Level::Debug);
    assert!(record.args().contains("2 nodes"));
}
