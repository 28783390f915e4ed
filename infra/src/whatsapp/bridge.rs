//! WhatsApp bridge client
//!
//! Delivers messages through a whatsapp-web.js sidecar exposing a small REST
//! surface (`POST /send`, `GET /session`). The sidecar owns the WhatsApp
//! session; this client only hands messages over, with retry on transient
//! failures.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info, warn};

use wt_core::services::gateway::{MessageSender, SendError};
use wt_shared::config::MessagingConfig;
use wt_shared::utils::phone::mask_phone_number;

use crate::InfrastructureError;

/// WhatsApp bridge configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the bridge sidecar
    pub base_url: String,
    /// Bearer token, if the bridge requires one
    pub access_token: Option<String>,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for bridge requests in seconds
    pub request_timeout_secs: u64,
}

impl BridgeConfig {
    /// Build a bridge configuration from the messaging section
    pub fn from_messaging(config: &MessagingConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Message id assigned by the bridge
#[derive(Debug, Deserialize)]
struct SendReceipt {
    id: String,
}

/// Session state reported by the bridge
#[derive(Debug, Deserialize)]
struct SessionStatus {
    connected: bool,
}

/// Message sender backed by the whatsapp-web.js bridge
pub struct WhatsAppBridgeSender {
    client: reqwest::Client,
    config: BridgeConfig,
}

impl WhatsAppBridgeSender {
    /// Create a new bridge sender
    pub fn new(config: BridgeConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("failed to build http client: {}", e))
            })?;

        info!("whatsapp bridge sender initialized for {}", config.base_url);

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send with retry and exponential backoff. Client errors from the
    /// bridge are not retried; transient failures are.
    async fn send_with_retry(
        &self,
        chat_id: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let url = self.endpoint("send");
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "sending whatsapp message attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_phone_number(chat_id)
            );

            let mut request = self
                .client
                .post(&url)
                .json(&json!({ "chatId": chat_id, "message": body }));
            if let Some(token) = &self.config.access_token {
                request = request.bearer_auth(token);
            }

            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    let receipt: SendReceipt = response.json().await.map_err(|e| {
                        InfrastructureError::Transport(format!(
                            "bridge returned an unreadable receipt: {}",
                            e
                        ))
                    })?;
                    info!(
                        "whatsapp message accepted for {} with id {}",
                        mask_phone_number(chat_id),
                        receipt.id
                    );
                    return Ok(receipt.id);
                }
                Ok(response) => {
                    let status = response.status();
                    if status.is_client_error() {
                        // the bridge understood us and said no; retrying won't help
                        return Err(InfrastructureError::Transport(format!(
                            "bridge rejected message: {}",
                            status
                        )));
                    }
                    warn!("bridge returned {}, retrying after {:?}", status, delay);
                }
                Err(e) => {
                    error!(
                        "bridge request failed (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );
                }
            }

            if attempts >= self.config.max_retries {
                return Err(InfrastructureError::Transport(format!(
                    "gave up after {} attempts",
                    attempts
                )));
            }

            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl MessageSender for WhatsAppBridgeSender {
    async fn send(&self, chat_id: &str, body: &str) -> Result<String, SendError> {
        self.send_with_retry(chat_id, body)
            .await
            .map_err(|e| SendError(e.to_string()))
    }

    async fn is_available(&self) -> bool {
        let url = self.endpoint("session");
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<SessionStatus>()
                .await
                .map(|status| status.connected)
                .unwrap_or(false),
            _ => false,
        }
    }

    fn provider_name(&self) -> &str {
        "whatsapp-bridge"
    }
}
