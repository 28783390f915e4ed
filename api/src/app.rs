//! Application factory
//!
//! Builds the Actix-web application over a gateway whose delivery capability
//! is chosen at startup (bridge in production, mock in development).

use actix_web::{error::InternalError, middleware::Logger, web, App, HttpResponse};

use wt_core::services::gateway::MessageSender;
use wt_shared::types::response::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::routes::otp::{
    reset_password::reset_password, send_otp::send_otp, status::status, verify_otp::verify_otp,
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<M>(
    app_state: web::Data<AppState<M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: MessageSender + 'static,
{
    let cors = create_cors();

    // Bodies that fail to parse (missing fields included) come back in the
    // same envelope as domain failures.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = ApiResponse::fail(format!("Invalid request body: {}", err));
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP password-reset lifecycle
        .route("/send-otp", web::post().to(send_otp::<M>))
        .route("/verify-otp", web::post().to(verify_otp::<M>))
        .route("/reset-password", web::post().to(reset_password::<M>))
        .route("/status", web::get().to(status::<M>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "wa-ticket-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::fail("The requested resource was not found."))
}
