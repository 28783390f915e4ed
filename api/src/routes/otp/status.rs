use actix_web::{web, HttpResponse};

use wt_core::services::gateway::MessageSender;

use crate::dto::otp::StatusResponse;

use super::AppState;

/// Handler for GET /status
///
/// Reports the WhatsApp session state and the number of outstanding
/// challenges.
pub async fn status<M>(state: web::Data<AppState<M>>) -> HttpResponse
where
    M: MessageSender + 'static,
{
    let whatsapp = if state.gateway.sender_available().await {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(StatusResponse {
        success: true,
        server: "running".to_string(),
        whatsapp: whatsapp.to_string(),
        active_otps: state.gateway.active_challenges(),
    })
}
