//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection
//! - `messaging` - Outbound WhatsApp delivery configuration
//! - `otp` - Verification code lifecycle configuration
//! - `server` - HTTP server configuration

pub mod environment;
pub mod messaging;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::Environment;
pub use messaging::MessagingConfig;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Verification code configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Outbound messaging configuration
    #[serde(default)]
    pub messaging: MessagingConfig,
}
