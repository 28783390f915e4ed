//! Verification gateway module
//!
//! The gateway mediates between callers, the challenge ledger, and the
//! injected message-sending capability:
//! - issuing a code and dispatching its delivery in the background
//! - verifying a submitted code
//! - certifying a password reset by consuming the verified challenge

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::GatewayConfig;
pub use service::{OtpIssued, VerificationGateway};
pub use traits::{MessageSender, SendError};
