//! Mock Message Sender
//!
//! A mock implementation of the message-sender port for development and
//! testing. Messages are printed to the console instead of being delivered.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use wt_core::services::gateway::{MessageSender, SendError};
use wt_shared::utils::phone::mask_phone_number;

/// Mock message sender for development and testing
///
/// This implementation:
/// - Logs messages to the console
/// - Records deliveries for assertions
/// - Generates mock message ids
#[derive(Clone)]
pub struct MockMessageSender {
    messages: Arc<Mutex<Vec<(String, String)>>>,
    message_count: Arc<AtomicU64>,
    connected: Arc<AtomicBool>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockMessageSender {
    /// Create a mock sender with console output enabled
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock sender that stays silent (for tests)
    pub fn quiet() -> Self {
        Self::with_options(false, false)
    }

    /// Create a mock sender with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            message_count: Arc::new(AtomicU64::new(0)),
            connected: Arc::new(AtomicBool::new(true)),
            simulate_failure,
            console_output,
        }
    }

    /// Deliveries recorded so far, as (chat id, body) pairs
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.messages.lock().expect("mock sender lock poisoned").clone()
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Flip the reported session state
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

impl Default for MockMessageSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn send(&self, chat_id: &str, body: &str) -> Result<String, SendError> {
        if self.simulate_failure {
            warn!(
                "mock sender simulating delivery failure for {}",
                mask_phone_number(chat_id)
            );
            return Err(SendError("simulated delivery failure".to_string()));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        self.messages
            .lock()
            .expect("mock sender lock poisoned")
            .push((chat_id.to_string(), body.to_string()));

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK WHATSAPP SENDER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", chat_id);
            println!("Message ID: {}", message_id);
            println!("Content: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "message_sender",
            provider = "mock",
            chat = %mask_phone_number(chat_id),
            message_id = %message_id,
            message_length = body.len(),
            "message sent (mock)"
        );

        Ok(message_id)
    }

    async fn is_available(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
