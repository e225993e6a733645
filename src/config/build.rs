//! Realisation of a [`FilterConfig`] tree into a [`Filter`].

use std::time::SystemTime;

use log::{debug, warn};

use super::types::{ConfigError, FilterConfig};
use crate::{
    filter::{self as combinators, Filter},
    filters::{self as f, FilterBuildError},
};

impl FilterConfig {
    /// Parse a JSON document describing a filter tree.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile the tree into a filter.
    ///
    /// Every pattern in the tree is compiled here; the first invalid one
    /// aborts the build.
    pub fn build(&self) -> Result<Filter, FilterBuildError> {
        let built = self.build_node()?;
        debug!("built filter tree with {} nodes", self.node_count());
        Ok(built)
    }

    /// Number of nodes in the tree, combinators included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::And { filters } | Self::Or { filters } => {
                1 + filters.iter().map(Self::node_count).sum::<usize>()
            }
            Self::Not { filter } => 1 + filter.node_count(),
            _ => 1,
        }
    }

    fn build_node(&self) -> Result<Filter, FilterBuildError> {
        Ok(match self {
            Self::And { filters } => combinators::and(Self::build_all(filters)?),
            Self::Or { filters } => combinators::or(Self::build_all(filters)?),
            Self::Not { filter } => combinators::not(filter.build_node()?),
            Self::LevelEquals { level } => f::level_equals(*level),
            Self::LevelAtLeast { level } => f::level_at_least(*level),
            Self::LevelAtMost { level } => f::level_at_most(*level),
            Self::MessageEquals { message } => f::message_equals(message.as_str()),
            Self::MessageContains { substring } => f::message_contains(substring.as_str()),
            Self::MessageMatches { pattern } => {
                f::message_matches(pattern).inspect_err(report_pattern)?
            }
            Self::AttrEquals { key, value } => f::attr_equals(key.as_str(), value.clone()),
            Self::AttrContains { key, substring } => {
                f::attr_contains(key.as_str(), substring.as_str())
            }
            Self::AttrMatches { key, pattern } => {
                f::attr_matches(key.as_str(), pattern).inspect_err(report_pattern)?
            }
            Self::AttrExists { key } => f::attr_exists(key.as_str()),
            Self::TimeAfter { time } => f::time_after(SystemTime::from(*time)),
            Self::TimeBefore { time } => f::time_before(SystemTime::from(*time)),
            Self::TimeBetween { start, end } => {
                f::time_between(SystemTime::from(*start), SystemTime::from(*end))
            }
        })
    }

    fn build_all(nodes: &[FilterConfig]) -> Result<Vec<Filter>, FilterBuildError> {
        nodes.iter().map(Self::build_node).collect()
    }
}

fn report_pattern(err: &FilterBuildError) {
    warn!("femtofilter: rejecting filter configuration: {err}");
}

/// Parse and build a filter from a JSON document in one step.
pub fn filter_from_json(json: &str) -> Result<Filter, ConfigError> {
    Ok(FilterConfig::from_json(json)?.build()?)
}
