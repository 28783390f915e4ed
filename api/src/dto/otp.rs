use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of POST /send-otp
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    /// Destination number, local ("0812...") or international ("62812...") format
    #[validate(length(min = 8, max = 20, message = "Phone number must be 8-20 characters"))]
    pub phone_number: String,

    /// Display name woven into the message greeting
    pub name: Option<String>,
}

/// Body of POST /verify-otp
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(min = 8, max = 20, message = "Phone number must be 8-20 characters"))]
    pub phone_number: String,

    /// 6-digit verification code
    #[validate(length(equal = 6, message = "Verification code must be 6 digits"))]
    pub otp: String,
}

/// Body of POST /reset-password
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(min = 8, max = 20, message = "Phone number must be 8-20 characters"))]
    pub phone_number: String,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

/// Success body of POST /send-otp
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    /// Seconds until the issued code expires
    pub expires_in: i64,
}

/// Success body of POST /verify-otp
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    pub verified: bool,
}

/// Body of GET /status
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub server: String,
    /// "connected" or "disconnected"
    pub whatsapp: String,
    #[serde(rename = "activeOTPs")]
    pub active_otps: usize,
}
