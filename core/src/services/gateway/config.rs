//! Configuration for the verification gateway

/// Configuration for the verification gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Country code assumed for numbers submitted in local format
    pub default_country_code: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_country_code: String::from("62"),
        }
    }
}
