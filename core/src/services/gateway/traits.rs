//! Outbound delivery port for the verification gateway

use async_trait::async_trait;
use thiserror::Error;

/// Delivery failure reported by a message sender.
///
/// Surfaces only in logs: by the time delivery runs, the acknowledgment has
/// already been returned to the caller.
#[derive(Debug, Clone, Error)]
#[error("message delivery failed: {0}")]
pub struct SendError(pub String);

/// Capability to deliver a WhatsApp message.
///
/// Implementations live in the infra crate; the gateway only sees this
/// contract.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver `body` to a chat address, returning a provider message id
    async fn send(&self, chat_id: &str, body: &str) -> Result<String, SendError>;

    /// Whether the underlying client currently holds a usable session
    async fn is_available(&self) -> bool;

    /// Short provider label for logs and the status endpoint
    fn provider_name(&self) -> &str;
}
