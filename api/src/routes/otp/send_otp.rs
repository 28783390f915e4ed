use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use wt_core::services::gateway::MessageSender;
use wt_shared::types::response::ApiResponse;
use wt_shared::utils::phone::{is_valid_phone, mask_phone_number};

use crate::dto::otp::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::validation_error_response;

use super::AppState;

/// Handler for POST /send-otp
///
/// Issues a fresh code for the number and acknowledges immediately. The code
/// counts as sent once it is handed to the delivery capability; actual
/// delivery runs in the background and its failure is only visible in logs.
pub async fn send_otp<M>(
    state: web::Data<AppState<M>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    M: MessageSender + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    if !is_valid_phone(
        &request.phone_number,
        state.gateway.default_country_code(),
    ) {
        return HttpResponse::BadRequest().json(ApiResponse::fail(
            "Phone number is not a valid WhatsApp number.",
        ));
    }

    info!(
        "processing send-otp for {}",
        mask_phone_number(&request.phone_number)
    );

    let issued = state
        .gateway
        .request_otp(&request.phone_number, request.name.as_deref());

    HttpResponse::Ok().json(SendOtpResponse {
        success: true,
        message: "A verification code has been sent to your WhatsApp.".to_string(),
        expires_in: issued.expires_in,
    })
}
