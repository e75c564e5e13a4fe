//! Portal configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Configuration for the `ballot-portal` CLI.
///
/// Loaded from a TOML file via [`PortalConfig::from_toml_file`]; any field
/// left out takes its default. Command-line flags override file values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Directory holding the persisted identity record.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Multiplier applied to every simulated latency. `0` disables waiting.
    #[serde(default = "default_latency_scale")]
    pub latency_scale: f64,

    /// Probability that the simulated ledger reports a vote as verified.
    #[serde(default = "default_verify_success_rate")]
    pub verify_success_rate: f64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./portal_data")
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "human".into()
}

fn default_latency_scale() -> f64 {
    1.0
}

fn default_verify_success_rate() -> f64 {
    portal_ballot::service::DEFAULT_VERIFY_SUCCESS_RATE
}

impl PortalConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.latency_scale.is_finite() && self.latency_scale >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "latency_scale",
                expected: "a non-negative number",
                value: self.latency_scale,
            });
        }
        if !(0.0..=1.0).contains(&self.verify_success_rate) {
            return Err(ConfigError::OutOfRange {
                field: "verify_success_rate",
                expected: "between 0 and 1",
                value: self.verify_success_rate,
            });
        }
        Ok(())
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            latency_scale: default_latency_scale(),
            verify_success_rate: default_verify_success_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = PortalConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = PortalConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = PortalConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.data_dir, PathBuf::from("./portal_data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.latency_scale, 1.0);
        assert_eq!(config.verify_success_rate, 0.8);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            data_dir = "/var/lib/portal"
            latency_scale = 0.0
        "#;
        let config = PortalConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/portal"));
        assert_eq!(config.latency_scale, 0.0);
        assert_eq!(config.log_format, "human");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = PortalConfig::from_toml_str("verify_success_rate = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "verify_success_rate",
                ..
            }
        ));
        assert!(PortalConfig::from_toml_str("latency_scale = -2.0").is_err());
    }

    #[test]
    fn missing_file_returns_read_error() {
        let err = PortalConfig::from_toml_file("/nonexistent/portal.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_toml_returns_parse_error() {
        let err = PortalConfig::from_toml_str("latency_scale = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
