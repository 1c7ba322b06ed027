//! Runtime configuration, read from the environment.

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Publishing and logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Emit newline-delimited JSON logs (`CHECKS_LOG_FORMAT=json`).
    pub log_json: bool,
    /// Default log level when `RUST_LOG` is unset (`CHECKS_LOG_LEVEL`).
    pub log_level: String,
    /// Resolve and validate, but never call the publisher
    /// (`CHECKS_SKIP_PUBLISH=1`).
    pub skip_publish: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            log_json: std::env::var("CHECKS_LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            log_level: std::env::var("CHECKS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            skip_publish: std::env::var("CHECKS_SKIP_PUBLISH")
                .map(|value| is_truthy(&value))
                .unwrap_or(false),
        }
    }
}

impl ChecksConfig {
    /// Create a config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn with_json_logs(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    pub fn with_log_level(mut self, log_level: &str) -> Self {
        self.log_level = log_level.to_string();
        self
    }

    pub fn with_skip_publish(mut self, skip_publish: bool) -> Self {
        self.skip_publish = skip_publish;
        self
    }

    /// Parsed `log_level`; unknown values fall back to `INFO`.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = ChecksConfig::from_env()
            .with_json_logs(true)
            .with_log_level("debug")
            .with_skip_publish(true);
        assert!(config.log_json);
        assert!(config.skip_publish);
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = ChecksConfig::from_env().with_log_level("loud");
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["0", "false", "", "no"] {
            assert!(!is_truthy(value), "{value}");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ChecksConfig::from_env().with_log_level("warn");
        let json = serde_json::to_string(&config).expect("serialize");
        let deserialized: ChecksConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, deserialized);
    }
}
