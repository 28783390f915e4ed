//! Verification gateway implementation

use std::sync::Arc;

use tracing::{error, info, warn};

use wt_shared::utils::phone::{canonicalize_phone, chat_id, mask_phone_number};

use crate::errors::OtpResult;
use crate::ledger::OtpLedger;

use super::config::GatewayConfig;
use super::traits::MessageSender;

/// Outcome of an OTP request, echoed back in the acknowledgment
#[derive(Debug, Clone)]
pub struct OtpIssued {
    /// Seconds until the issued code expires
    pub expires_in: i64,
}

/// Request-handling layer for the OTP password-reset lifecycle
pub struct VerificationGateway<M: MessageSender> {
    ledger: Arc<OtpLedger>,
    sender: Arc<M>,
    config: GatewayConfig,
}

impl<M: MessageSender + 'static> VerificationGateway<M> {
    /// Create a new gateway over a ledger and a delivery capability
    pub fn new(ledger: Arc<OtpLedger>, sender: Arc<M>, config: GatewayConfig) -> Self {
        Self {
            ledger,
            sender,
            config,
        }
    }

    fn ledger_key(&self, phone: &str) -> String {
        canonicalize_phone(phone, &self.config.default_country_code)
    }

    /// Country code assumed for numbers submitted in local format
    pub fn default_country_code(&self) -> &str {
        &self.config.default_country_code
    }

    /// Issue a code for `phone` and hand its delivery to the sender.
    ///
    /// The acknowledgment is final once the ledger holds the challenge;
    /// delivery runs detached and its failure is logged, never reported back
    /// to the caller.
    pub fn request_otp(&self, phone: &str, display_name: Option<&str>) -> OtpIssued {
        let key = self.ledger_key(phone);
        let code = self.ledger.issue(&key);

        let destination = chat_id(&key);
        let body = reset_message(display_name, &code, self.ledger.ttl_seconds());
        let masked = mask_phone_number(&key);
        let sender = Arc::clone(&self.sender);

        tokio::spawn(async move {
            match sender.send(&destination, &body).await {
                Ok(message_id) => {
                    info!(
                        phone = %masked,
                        message_id = %message_id,
                        provider = sender.provider_name(),
                        event = "otp_delivered",
                        "reset code handed off for delivery"
                    );
                }
                Err(err) => {
                    error!(
                        phone = %masked,
                        error = %err,
                        provider = sender.provider_name(),
                        event = "otp_delivery_failed",
                        "failed to deliver reset code"
                    );
                }
            }
        });

        OtpIssued {
            expires_in: self.ledger.ttl_seconds(),
        }
    }

    /// Check a submitted code against the outstanding challenge
    pub fn verify_otp(&self, phone: &str, code: &str) -> OtpResult<()> {
        let key = self.ledger_key(phone);
        let result = self.ledger.check(&key, code);
        if let Err(err) = &result {
            warn!(
                phone = %mask_phone_number(&key),
                error = %err,
                event = "otp_verification_rejected",
                "code verification rejected"
            );
        }
        result
    }

    /// Certify a password reset by consuming the verified challenge.
    ///
    /// Overwriting the stored credential belongs to the caller; the gateway
    /// only closes the challenge.
    pub fn reset_password(&self, phone: &str) -> OtpResult<()> {
        let key = self.ledger_key(phone);
        let result = self.ledger.consume_if_verified(&key);
        match &result {
            Ok(()) => {
                info!(
                    phone = %mask_phone_number(&key),
                    event = "password_reset_certified",
                    "challenge consumed, reset certified"
                );
            }
            Err(err) => {
                warn!(
                    phone = %mask_phone_number(&key),
                    error = %err,
                    event = "password_reset_rejected",
                    "reset attempted without a verified challenge"
                );
            }
        }
        result
    }

    /// Whether the delivery capability currently holds a usable session
    pub async fn sender_available(&self) -> bool {
        self.sender.is_available().await
    }

    /// Number of challenges currently outstanding
    pub fn active_challenges(&self) -> usize {
        self.ledger.active_count()
    }
}

/// Password-reset message delivered over WhatsApp
fn reset_message(display_name: Option<&str>, code: &str, ttl_seconds: i64) -> String {
    let minutes = ttl_seconds / 60;
    format!(
        "Hello {}! 👋\n\n\
         We received a *password reset* request for your account.\n\n\
         🔐 *{}*\n\n\
         This code is *valid for {} minutes*.\n\
         ⚠️ For your safety, never share it with anyone, including our staff.\n\n\
         Regards,\n\
         The Web Ticketing Team",
        display_name.unwrap_or("User"),
        code,
        minutes
    )
}
