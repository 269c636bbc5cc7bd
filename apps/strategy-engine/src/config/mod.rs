//! Configuration module for the strategy engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strategy_engine::config::load_config;
//!
//! // Load from STRATEGY_ENGINE_CONFIG or config.yaml
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("default expiration: {}", config.leg_defaults.expiration_days);
//! ```

mod observability;
mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use store::StoreConfig;

use crate::domain::strategy_definition::LegDefaults;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "STRATEGY_ENGINE_CONFIG";

/// Config file used when neither an explicit path nor the env var is set.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Attributes for newly added legs.
    #[serde(default)]
    pub leg_defaults: LegDefaults,
    /// Strategy store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Resolve the config file path: explicit path, then `STRATEGY_ENGINE_CONFIG`,
/// then `config.yaml`.
#[must_use]
pub fn resolve_config_path(path: Option<&str>) -> String {
    path.map(str::to_string)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty()))
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = resolve_config_path(path);

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "logging.format must be one of {}, got '{format}'",
            LOG_FORMATS.join(", ")
        )));
    }

    if config.leg_defaults.quantity <= 0 {
        return Err(ConfigError::ValidationError(
            "leg_defaults.quantity must be positive".to_string(),
        ));
    }

    if config.leg_defaults.expiration_days < 0 {
        return Err(ConfigError::ValidationError(
            "leg_defaults.expiration_days must not be negative".to_string(),
        ));
    }

    if config.store.owner_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "store.owner_id must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy_definition::{LegAction, OptionType, StrikeMode};
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, "json");
        assert!(config.observability.logging.include_spans);
        assert_eq!(config.leg_defaults, LegDefaults::default());
        assert_eq!(config.store.owner_id, "local");
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r"
observability:
  logging:
    level: debug
    format: pretty
    include_spans: false
leg_defaults:
  action: sell
  option_type: put
  quantity: 2
  strike_value: 100.5
  strike_mode: delta
  expiration_days: 45
store:
  owner_id: desk-7
";
        let config = load_config_from_string(yaml).unwrap();

        assert_eq!(config.observability.logging.format, "pretty");
        assert!(!config.observability.logging.include_spans);
        assert_eq!(config.leg_defaults.action, LegAction::Sell);
        assert_eq!(config.leg_defaults.option_type, OptionType::Put);
        assert_eq!(config.leg_defaults.quantity, 2);
        assert_eq!(config.leg_defaults.strike_value, dec!(100.5));
        assert_eq!(config.leg_defaults.strike_mode, StrikeMode::Delta);
        assert_eq!(config.leg_defaults.expiration_days, 45);
        assert_eq!(config.store.owner_id, "desk-7");
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "owner_id: ${STRATEGY_ENGINE_TEST_NONEXISTENT_VAR:-desk}";
        assert_eq!(interpolate_env_vars(input), "owner_id: desk");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "owner_id: ${STRATEGY_ENGINE_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "owner_id: ");
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = "observability:\n  logging:\n    format: xml\n";
        let result = load_config_from_string(yaml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_non_positive_quantity() {
        let result = load_config_from_string("leg_defaults:\n  quantity: 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("quantity")));
    }

    #[test]
    fn test_validation_negative_expiration() {
        let result = load_config_from_string("leg_defaults:\n  expiration_days: -1\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_enum_in_leg_defaults_is_parse_error() {
        let result = load_config_from_string("leg_defaults:\n  action: hold\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store:\n  owner_id: desk-file").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.store.owner_id, "desk-file");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = load_config(Some("/nonexistent/strategy-engine/config.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(resolve_config_path(Some("a.yaml")), "a.yaml");
    }
}
