//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default delay of the conversion stub.
pub const DEFAULT_CONVERT_DELAY_MS: u64 = 2000;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// How long the conversion stub waits before answering
    pub convert_delay_ms: u64,

    /// Load the sample catalog at startup
    pub seed_sample_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            convert_delay_ms: DEFAULT_CONVERT_DELAY_MS,
            seed_sample_data: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        ApiConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("MEDIAHUB_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: parse_or("MEDIAHUB_PORT", &lookup, defaults.port)?,

            convert_delay_ms: parse_or(
                "MEDIAHUB_CONVERT_DELAY_MS",
                &lookup,
                defaults.convert_delay_ms,
            )?,

            seed_sample_data: parse_or(
                "MEDIAHUB_SEED_SAMPLE_DATA",
                &lookup,
                defaults.seed_sample_data,
            )?,
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("MEDIAHUB_BIND_ADDR".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn convert_delay(&self) -> Duration {
        Duration::from_millis(self.convert_delay_ms)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
