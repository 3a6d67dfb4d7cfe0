//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, reason: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, reason } => write!(f, "Invalid {}: {}", var, reason),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse configuration from a TOML file without validating it.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment variables onto a configuration.
///
/// `lookup` is usually `std::env::var(..).ok()`; tests pass a map instead.
pub fn apply_env<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        let port: u16 = port.trim().parse().map_err(|e| ConfigError::Env {
            var: "PORT",
            reason: format!("{}", e),
        })?;
        let host = config
            .listener
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.listener.bind_address = format!("{}:{}", host, port);
    }

    if let Some(origin) = lookup("CORS_ORIGIN") {
        config.cors.allowed_origin = origin;
    }

    if let Some(key) = lookup("SHIPSTATION_API_KEY") {
        config.upstream.api_key = Some(key);
    }

    if let Some(url) = lookup("UPSTREAM_BASE_URL") {
        config.upstream.base_url = url;
    }

    if let Some(secs) = lookup("UPSTREAM_TIMEOUT_SECS") {
        config.upstream.timeout_secs = secs.trim().parse().map_err(|e| ConfigError::Env {
            var: "UPSTREAM_TIMEOUT_SECS",
            reason: format!("{}", e),
        })?;
    }

    Ok(())
}

/// Load the relay configuration: file (if any), then environment, then validation.
pub fn load(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    apply_env(&mut config, |var| std::env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RelayConfig::default();
        apply_env(
            &mut config,
            env(&[
                ("PORT", "8088"),
                ("CORS_ORIGIN", "https://shop.example.com"),
                ("SHIPSTATION_API_KEY", "key"),
            ]),
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:8088");
        assert_eq!(config.cors.allowed_origin, "https://shop.example.com");
        assert_eq!(config.upstream.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_api_secret_env_is_ignored() {
        let mut config = RelayConfig::default();
        apply_env(&mut config, env(&[("SHIPSTATION_API_SECRET", "secret")])).unwrap();

        assert!(!config.upstream.has_credentials());
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_env_without_overrides_keeps_defaults() {
        let mut config = RelayConfig::default();
        apply_env(&mut config, env(&[])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = RelayConfig::default();
        let err = apply_env(&mut config, env(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().starts_with("Invalid PORT"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/relay.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
