//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `USHER_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

use crate::faq::scoring::{DEFAULT_THRESHOLD, SUGGESTION_MIN_SIMILARITY};

/// Default number of alternate questions returned by the suggestion ranker.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Matcher configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `USHER_*` overrides on top of defaults.
/// The scoring weights and penalty factors are deliberately *not*
/// configurable; they are tuned constants (see [`crate::faq::scoring`]).
#[derive(Debug, Clone)]
pub struct Config {
    /// Acceptance threshold for the combined score. Default: `0.7`.
    pub match_threshold: f32,

    /// Max suggestions returned per query. Default: `3`.
    pub suggestion_limit: usize,

    /// Minimum semantic similarity for a suggestion. Default: `0.3`.
    pub suggestion_min_similarity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_THRESHOLD,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            suggestion_min_similarity: SUGGESTION_MIN_SIMILARITY,
        }
    }
}

impl Config {
    const ENV_MATCH_THRESHOLD: &'static str = "USHER_MATCH_THRESHOLD";
    const ENV_SUGGESTION_LIMIT: &'static str = "USHER_SUGGESTION_LIMIT";
    const ENV_SUGGESTION_MIN_SIMILARITY: &'static str = "USHER_SUGGESTION_MIN_SIMILARITY";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let match_threshold =
            Self::parse_f32_from_env(Self::ENV_MATCH_THRESHOLD, defaults.match_threshold)?;
        let suggestion_limit =
            Self::parse_usize_from_env(Self::ENV_SUGGESTION_LIMIT, defaults.suggestion_limit)?;
        let suggestion_min_similarity = Self::parse_f32_from_env(
            Self::ENV_SUGGESTION_MIN_SIMILARITY,
            defaults.suggestion_min_similarity,
        )?;

        let config = Self {
            match_threshold,
            suggestion_limit,
            suggestion_min_similarity,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: Self::ENV_MATCH_THRESHOLD,
                value: self.match_threshold,
            });
        }

        if !(self.suggestion_min_similarity > 0.0 && self.suggestion_min_similarity <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: Self::ENV_SUGGESTION_MIN_SIMILARITY,
                value: self.suggestion_min_similarity,
            });
        }

        if self.suggestion_limit == 0 {
            return Err(ConfigError::InvalidSuggestionLimit {
                value: self.suggestion_limit,
            });
        }

        Ok(())
    }

    fn parse_f32_from_env(name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse().map_err(|_| ConfigError::ParseError {
                name,
                value,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse().map_err(|_| ConfigError::ParseError {
                name,
                value,
            }),
            Err(_) => Ok(default),
        }
    }
}
