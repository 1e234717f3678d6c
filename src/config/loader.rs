//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variables consulted for the listen port, highest priority first.
pub const PORT_ENV_VARS: [&str; 2] = ["SERVICE_PORT", "PORT"];

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: '{value}'")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply process environment
/// overrides and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_file(path)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, |var| std::env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Override the listen port from `SERVICE_PORT` or `PORT`.
///
/// `lookup` abstracts the environment so tests need not mutate process state.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for var in PORT_ENV_VARS {
        if let Some(value) = lookup(var) {
            let port = value.trim().parse::<u16>().map_err(|_| ConfigError::Env {
                var,
                value: value.clone(),
            })?;
            tracing::debug!(var, port, "Port taken from environment");
            config.listener.port = port;
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{LogFormat, ResourceKind};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [service]
            resource = "statements"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.resource, ResourceKind::Statements);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.dice.max_rolls, 1000);
    }

    #[test]
    fn test_service_port_wins_over_port() {
        let mut config = ServiceConfig::default();
        let lookup = env(&[("PORT", "3000"), ("SERVICE_PORT", "4000")]);
        apply_env_overrides(&mut config, lookup).unwrap();
        assert_eq!(config.listener.port, 4000);
    }

    #[test]
    fn test_port_fallback() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, env(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.listener.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_no_env_keeps_default() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn test_bad_port_rejected() {
        let mut config = ServiceConfig::default();
        let err = apply_env_overrides(&mut config, env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PORT", .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
