//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Base URL used when no configuration file or environment override exists.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Fixed upper bound for any single request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the API client, loaded from
/// `~/.config/scalptrack/config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server origin, without the `/api/v1` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout override.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str("base_url = \"https://api.example.com\"").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 10);
    }
}
