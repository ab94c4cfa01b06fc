use morning_greetings::domain::EmailAddress;
use morning_greetings::error::{SendError, SendResult};
use morning_greetings::MessageSender;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock sender for testing.
///
/// Records every delivered `(email, body)` pair in order and fails for
/// addresses registered with `fail_for`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSender {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send to `email` fail with a delivery error.
    pub fn fail_for(&self, email: &str) {
        self.failing.lock().unwrap().insert(email.to_string());
    }

    /// Delivered messages, in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self) -> Vec<String> {
        self.sent().into_iter().map(|(email, _)| email).collect()
    }
}

impl MessageSender for MockSender {
    fn send(&self, email: &EmailAddress, body: &str) -> SendResult<()> {
        if self.failing.lock().unwrap().contains(email.as_str()) {
            return Err(SendError::Delivery(format!("rejected by mock: {}", email)));
        }
        if body.is_empty() {
            return Err(SendError::EmptyBody);
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), body.to_string()));
        Ok(())
    }
}
