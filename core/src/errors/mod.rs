//! Domain-specific error types for the OTP challenge lifecycle.
//!
//! Ledger failures are mapped to client-facing message strings at the API
//! boundary; none of them are fatal to the process.

use thiserror::Error;

/// Failures raised by ledger operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    /// No active challenge exists for the phone number
    #[error("no active verification code for this phone number")]
    NotFound,

    /// The challenge existed but passed its deadline
    #[error("verification code has expired")]
    Expired,

    /// The submitted code does not match the issued one
    #[error("verification code does not match")]
    Mismatch,

    /// Reset attempted before the challenge was verified
    #[error("phone number has not completed verification")]
    NotVerified,
}

/// Result type for ledger operations
pub type OtpResult<T> = Result<T, OtpError>;
