//! Verification code configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the verification code lifecycle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a code stays valid; also the delay before its scheduled purge
    #[serde(default = "default_code_ttl_seconds")]
    pub code_ttl_seconds: i64,

    /// Country code assumed for numbers submitted in local format
    #[serde(default = "default_country_code")]
    pub default_country_code: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl_seconds(),
            default_country_code: default_country_code(),
        }
    }
}

fn default_code_ttl_seconds() -> i64 {
    300 // 5 minutes
}

fn default_country_code() -> String {
    String::from("62")
}
