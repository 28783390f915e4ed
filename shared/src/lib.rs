//! Shared utilities and common types for the WaTicket server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The flat API response envelope
//! - Utility functions (phone number handling)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, MessagingConfig, OtpConfig, ServerConfig};
pub use types::ApiResponse;
pub use utils::phone;
