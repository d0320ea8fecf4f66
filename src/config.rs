//! Runtime configuration for hosts embedding the modifier pipeline.

use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides [`LogConfig::filter`].
pub const LOG_ENV: &str = "WATERUI_MODIFIER_LOG";

const DEFAULT_FILTER: &str = "info";

/// Errors raised while loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid modifier config: {0}")]
    Json(#[from] serde_json::Error),
    /// The log filter directive is malformed.
    #[error("invalid log filter `{filter}`: {source}")]
    Filter {
        /// The rejected directive.
        filter: String,
        /// Parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub log: LogConfig,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive, such as `"info,waterui_modifier_core=trace"`.
    pub filter: String,
    /// Emit ANSI colors.
    pub ansi: bool,
    /// Include the event target in each line.
    pub target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            ansi: true,
            target: false,
        }
    }
}

impl Config {
    /// Parses a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or has
    /// unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default configuration with the filter taken from [`LOG_ENV`], if set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_override(std::env::var(LOG_ENV).ok());
        config
    }

    /// Replaces the log filter with `filter` when it is present and non-empty.
    pub fn apply_env_override(&mut self, filter: Option<String>) {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.log.filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log.filter, "info");
        assert!(config.log.ansi);
        assert!(!config.log.target);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "log": { "filter": "debug" } }"#).unwrap();
        assert_eq!(config.log.filter, "debug");
        assert!(config.log.ansi);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = Config::from_json(r#"{ "logging": {} }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config.apply_env_override(Some("trace".into()));
        assert_eq!(config.log.filter, "trace");

        config.apply_env_override(Some("  ".into()));
        config.apply_env_override(None);
        assert_eq!(config.log.filter, "trace");
    }
}
