//! Environment-driven configuration assembly

use std::env;

use wt_shared::config::{AppConfig, Environment, MessagingConfig, OtpConfig, ServerConfig};

/// Assemble the runtime configuration from environment variables, falling
/// back to defaults suitable for local development.
pub fn load() -> AppConfig {
    let environment = Environment::from_env();

    let server_defaults = ServerConfig::default();
    let server = ServerConfig {
        host: env::var("SERVER_HOST").unwrap_or(server_defaults.host),
        port: env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(server_defaults.port),
    };

    let otp_defaults = OtpConfig::default();
    let otp = OtpConfig {
        code_ttl_seconds: env::var("OTP_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(otp_defaults.code_ttl_seconds),
        default_country_code: env::var("OTP_COUNTRY_CODE")
            .unwrap_or(otp_defaults.default_country_code),
    };

    let messaging_defaults = MessagingConfig::default();
    let messaging = MessagingConfig {
        provider: env::var("WHATSAPP_PROVIDER").unwrap_or(messaging_defaults.provider),
        base_url: env::var("WHATSAPP_BRIDGE_URL").unwrap_or(messaging_defaults.base_url),
        access_token: env::var("WHATSAPP_BRIDGE_TOKEN").ok(),
        request_timeout_secs: env::var("WHATSAPP_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(messaging_defaults.request_timeout_secs),
        max_retries: env::var("WHATSAPP_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(messaging_defaults.max_retries),
        retry_delay_ms: env::var("WHATSAPP_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(messaging_defaults.retry_delay_ms),
    };

    AppConfig {
        environment,
        server,
        otp,
        messaging,
    }
}
