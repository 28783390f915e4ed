use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use wt_api::app::create_app;
use wt_api::config;
use wt_api::routes::otp::AppState;
use wt_core::ledger::OtpLedger;
use wt_core::schedule::TokioScheduler;
use wt_core::services::gateway::{GatewayConfig, MessageSender, VerificationGateway};
use wt_core::time::SystemClock;
use wt_infra::whatsapp::{BridgeConfig, MockMessageSender, WhatsAppBridgeSender};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::load();
    info!(
        "Starting WaTicket OTP server in {} mode",
        config.environment
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let ledger = Arc::new(OtpLedger::new(
        Arc::new(SystemClock),
        Arc::new(TokioScheduler),
        config.otp.code_ttl_seconds,
    ));

    let gateway_config = GatewayConfig {
        default_country_code: config.otp.default_country_code.clone(),
    };

    match config.messaging.provider.as_str() {
        "bridge" => {
            let bridge_config = BridgeConfig::from_messaging(&config.messaging);
            let sender = WhatsAppBridgeSender::new(bridge_config)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            serve(ledger, Arc::new(sender), gateway_config, &bind_address).await
        }
        provider => {
            if provider != "mock" {
                warn!("unknown messaging provider '{}', using mock sender", provider);
            }
            serve(
                ledger,
                Arc::new(MockMessageSender::new()),
                gateway_config,
                &bind_address,
            )
            .await
        }
    }
}

async fn serve<M>(
    ledger: Arc<OtpLedger>,
    sender: Arc<M>,
    gateway_config: GatewayConfig,
    bind_address: &str,
) -> std::io::Result<()>
where
    M: MessageSender + 'static,
{
    let gateway = Arc::new(VerificationGateway::new(ledger, sender, gateway_config));
    let app_state = web::Data::new(AppState { gateway });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(bind_address)?
        .run()
        .await
}
