//! Business services containing domain logic and use cases.

pub mod gateway;

// Re-export commonly used types
pub use gateway::{
    GatewayConfig, MessageSender, OtpIssued, SendError, VerificationGateway,
};
