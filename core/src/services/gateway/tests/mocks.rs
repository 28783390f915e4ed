//! Mock implementations for testing the verification gateway

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::services::gateway::traits::{MessageSender, SendError};

/// Message sender that records deliveries instead of performing them
pub struct MockSender {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
    pub should_fail: bool,
    available: AtomicBool,
}

impl MockSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            available: AtomicBool::new(true),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for MockSender {
    async fn send(&self, chat_id: &str, body: &str) -> Result<String, SendError> {
        if self.should_fail {
            return Err(SendError("simulated delivery failure".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.to_string(), body.to_string()));
        Ok(format!("mock-msg-{}", self.sent.lock().unwrap().len()))
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
