//! WhatsApp Delivery Module
//!
//! Implementations of the gateway's message-sender port:
//!
//! - **Bridge client**: hands messages to a whatsapp-web.js sidecar over a
//!   small REST surface; the sidecar owns the actual protocol session
//! - **Mock**: console output for development and tests

pub mod bridge;
pub mod mock;

// Re-export commonly used types
pub use bridge::{BridgeConfig, WhatsAppBridgeSender};
pub use mock::MockMessageSender;
