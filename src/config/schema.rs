//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root configuration for the tracking relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin policy for the browser frontend.
    pub cors: CorsConfig,

    /// Shipping aggregator API settings.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origin allowed to call the relay, or "*" for any.
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
        }
    }
}

/// Shipping aggregator API configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the aggregator REST API.
    pub base_url: String,

    /// API key, sent as the basic-auth username. Lookups are skipped when unset.
    pub api_key: Option<String>,

    /// Deadline for a single lookup in seconds.
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// True when a non-blank API key is present.
    pub fn has_credentials(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ssapi.shipstation.com".to_string(),
            api_key: None,
            timeout_secs: 5,
        }
    }
}

// Credentials never reach the logs.
impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.cors.allowed_origin, "*");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert!(!config.upstream.has_credentials());
    }

    #[test]
    fn test_partial_config() {
        let config: RelayConfig = toml::from_str(
            r#"
            [upstream]
            api_key = "key-123"
            timeout_secs = 2

            [cors]
            allowed_origin = "https://shop.example.com"
            "#,
        )
        .unwrap();

        assert!(config.upstream.has_credentials());
        assert_eq!(config.upstream.timeout_secs, 2);
        assert_eq!(config.upstream.base_url, "https://ssapi.shipstation.com");
        assert_eq!(config.cors.allowed_origin, "https://shop.example.com");
    }

    #[test]
    fn test_blank_key_is_not_a_credential() {
        let config = UpstreamConfig {
            api_key: Some("  ".into()),
            ..UpstreamConfig::default()
        };
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = UpstreamConfig {
            api_key: Some("super-secret".into()),
            ..UpstreamConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
