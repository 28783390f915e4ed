use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use wt_core::services::gateway::MessageSender;
use wt_shared::types::response::ApiResponse;
use wt_shared::utils::phone::mask_phone_number;

use crate::dto::otp::ResetPasswordRequest;
use crate::handlers::error::{otp_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /reset-password
///
/// Succeeds only when the number holds a verified challenge, and consumes
/// that challenge so it cannot back a second reset. Overwriting the stored
/// credential is the storefront's job; this endpoint only certifies that
/// verification happened.
pub async fn reset_password<M>(
    state: web::Data<AppState<M>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    M: MessageSender + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.gateway.reset_password(&request.phone_number) {
        Ok(()) => {
            info!(
                "password reset certified for {}",
                mask_phone_number(&request.phone_number)
            );
            HttpResponse::Ok().json(ApiResponse::ok("Password has been reset."))
        }
        Err(err) => otp_error_response(&err),
    }
}
