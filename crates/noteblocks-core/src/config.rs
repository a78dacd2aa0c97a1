//! Render configuration.
//!
//! Loaded from environment variables:
//!
//! | Variable            | Values              | Default    |
//! |---------------------|---------------------|------------|
//! | `NOTEBLOCKS_OUTPUT` | `markdown` / `json` | `markdown` |
//! | `NOTEBLOCKS_PRETTY` | `true` / `false`    | `false`    |

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::properties::parse_bool;

pub const ENV_OUTPUT: &str = "NOTEBLOCKS_OUTPUT";
pub const ENV_PRETTY: &str = "NOTEBLOCKS_PRETTY";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid output format: {0}")]
    InvalidOutput(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        crate::error::Error::Config(e.to_string())
    }
}

/// Target format of a tree render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub output: OutputFormat,
    /// Indent JSON output.
    pub pretty: bool,
}

impl RenderConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparsable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let output = match var(ENV_OUTPUT) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Invalid NOTEBLOCKS_OUTPUT, using default");
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        };

        let pretty = match var(ENV_PRETTY) {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Invalid NOTEBLOCKS_PRETTY, using default");
                false
            }),
            None => false,
        };

        Self { output, pretty }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pretty && self.output != OutputFormat::Json {
            return Err(ConfigError::Validation(format!(
                "pretty printing applies to json output only, got: {}",
                self.output
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RenderConfig::from_vars(vars(&[]));
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.output, OutputFormat::Markdown);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_output_and_pretty() {
        let config = RenderConfig::from_vars(vars(&[(ENV_OUTPUT, "JSON"), (ENV_PRETTY, "true")]));
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = RenderConfig::from_vars(vars(&[(ENV_OUTPUT, "yaml"), (ENV_PRETTY, "very")]));
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_validate_rejects_pretty_markdown() {
        let config = RenderConfig {
            output: OutputFormat::Markdown,
            pretty: true,
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(ConfigError::InvalidOutput(_))
        ));
    }

    #[test]
    fn test_config_error_into_core_error() {
        let err: crate::error::Error = ConfigError::Validation("x".into()).into();
        assert_eq!(err.to_string(), "Configuration error: Validation error: x");
    }
}
