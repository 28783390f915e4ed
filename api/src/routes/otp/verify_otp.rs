use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use wt_core::services::gateway::MessageSender;
use wt_shared::utils::phone::mask_phone_number;

use crate::dto::otp::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::{otp_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /verify-otp
///
/// Checks the submitted code against the outstanding challenge and marks it
/// verified on match.
pub async fn verify_otp<M>(
    state: web::Data<AppState<M>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    M: MessageSender + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .gateway
        .verify_otp(&request.phone_number, &request.otp)
    {
        Ok(()) => {
            info!(
                "verification succeeded for {}",
                mask_phone_number(&request.phone_number)
            );
            HttpResponse::Ok().json(VerifyOtpResponse {
                success: true,
                message: "Verification code accepted.".to_string(),
                verified: true,
            })
        }
        Err(err) => otp_error_response(&err),
    }
}
