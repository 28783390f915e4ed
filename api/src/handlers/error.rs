//! Mapping between domain failures and HTTP responses
//!
//! Every ledger failure becomes a 400 with a client-facing message in the
//! flat response envelope; none of them are fatal.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use wt_core::errors::OtpError;
use wt_shared::types::response::ApiResponse;

/// Map a ledger failure onto its client-facing message
pub fn otp_error_response(err: &OtpError) -> HttpResponse {
    let message = match err {
        OtpError::NotFound => "No verification code found for this number. Please request a new one.",
        OtpError::Expired => "The verification code has expired. Please request a new one.",
        OtpError::Mismatch => "Incorrect verification code.",
        OtpError::NotVerified => "Please verify the code before resetting your password.",
    };
    HttpResponse::BadRequest().json(ApiResponse::fail(message))
}

/// 400 for request bodies that fail field validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request data".to_string());
    HttpResponse::BadRequest().json(ApiResponse::fail(message))
}
