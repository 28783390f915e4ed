//! Outbound messaging configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the WhatsApp delivery capability
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingConfig {
    /// Delivery provider ("mock" or "bridge")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the WhatsApp bridge sidecar
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the bridge, if it requires one
    #[serde(default)]
    pub access_token: Option<String>,

    /// Timeout for bridge requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum retry attempts for failed bridge requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            access_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_base_url() -> String {
    String::from("http://127.0.0.1:3001")
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_config_default() {
        let config = MessagingConfig::default();
        assert_eq!(config.provider, "mock");
        assert_eq!(config.max_retries, 3);
        assert!(config.access_token.is_none());
    }
}
