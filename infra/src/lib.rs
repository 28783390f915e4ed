//! # Infrastructure Layer
//!
//! Concrete delivery implementations for the WaTicket backend. The core
//! crate defines the [`wt_core::services::gateway::MessageSender`] port;
//! this crate provides the WhatsApp bridge client used in production and a
//! console mock for development and tests.

use thiserror::Error;

/// WhatsApp delivery module - bridge client and mock
pub mod whatsapp;

/// Errors raised by infrastructure components
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The bridge rejected or never answered a request
    #[error("whatsapp transport error: {0}")]
    Transport(String),
}
