//! Password-reset OTP routes

pub mod reset_password;
pub mod send_otp;
pub mod status;
pub mod verify_otp;

use std::sync::Arc;

use wt_core::services::gateway::{MessageSender, VerificationGateway};

/// Application state that holds the shared gateway
pub struct AppState<M: MessageSender> {
    pub gateway: Arc<VerificationGateway<M>>,
}
