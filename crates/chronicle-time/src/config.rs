//! Configuration loading and typed config structures for the timeline
//! core.
//!
//! Hosts describe the time-travel behavior in a small YAML document and
//! hand it to [`TravelConfig::from_file`] (or [`TravelConfig::parse`] for
//! in-memory strings). Every field has a default matching the base
//! behavior, so an empty document is a valid configuration.
//!
//! ```yaml
//! branch:
//!   policy: retain-all-histories   # or prune-on-commit
//! clock:
//!   start_point: 0
//! ```

use std::path::Path;

use serde::Deserialize;

use chronicle_types::TimePoint;

use crate::branch::BranchPolicy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level time-travel configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TravelConfig {
    /// Branching and commit behavior.
    #[serde(default)]
    pub branch: BranchConfig,

    /// Virtual clock settings.
    #[serde(default)]
    pub clock: ClockConfig,
}

impl TravelConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Branching and commit behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BranchConfig {
    /// What happens to a superseded former-main timeline on commit.
    /// Defaults to retaining every history.
    #[serde(default)]
    pub policy: BranchPolicy,
}

/// Virtual clock settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// The instant the genesis timeline's clock starts at.
    #[serde(default)]
    pub start_point: u64,
}

impl ClockConfig {
    /// The configured starting instant as a [`TimePoint`].
    pub const fn initial_point(&self) -> TimePoint {
        TimePoint::new(self.start_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = TravelConfig::parse("{}").ok();
        assert_eq!(config, Some(TravelConfig::default()));
        let config = config.unwrap_or_default();
        assert_eq!(config.branch.policy, BranchPolicy::RetainAllHistories);
        assert_eq!(config.clock.initial_point(), TimePoint::ORIGIN);
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        let yaml = "branch:\n  policy: prune-on-commit\n";
        let config = TravelConfig::parse(yaml).ok();
        assert_eq!(
            config.map(|c| c.branch.policy),
            Some(BranchPolicy::PruneOnCommit)
        );
    }

    #[test]
    fn start_point_parses() {
        let yaml = "clock:\n  start_point: 42\n";
        let config = TravelConfig::parse(yaml).ok();
        assert_eq!(
            config.map(|c| c.clock.initial_point()),
            Some(TimePoint::new(42))
        );
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let yaml = "branch:\n  policy: rewrite-everything\n";
        assert!(TravelConfig::parse(yaml).is_err());
    }
}
