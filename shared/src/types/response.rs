//! API response envelope
//!
//! Every endpoint answers with a flat object carrying a `success` flag and a
//! human-readable `message`. Endpoints that return extra fields (expiry,
//! verification flag, server status) define their own response structs in the
//! API crate with the same two leading fields.

use serde::{Deserialize, Serialize};

/// Flat response body shared by acknowledgments and failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was handled successfully
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Internal error detail, only present on unexpected failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Create a successful response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    /// Create a failure response
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    /// Create a failure response carrying an internal error detail
    pub fn fail_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
