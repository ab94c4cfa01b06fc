//! Message senders.

use crate::domain::EmailAddress;
use crate::error::{SendError, SendResult};
use tracing::info;

/// Something that can deliver a greeting to an email address.
pub trait MessageSender {
    /// Send `body` to `email`.
    fn send(&self, email: &EmailAddress, body: &str) -> SendResult<()>;
}

/// Prints messages to stdout instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

impl MessageSender for ConsoleSender {
    fn send(&self, email: &EmailAddress, body: &str) -> SendResult<()> {
        if body.is_empty() {
            return Err(SendError::EmptyBody);
        }

        println!("Sending message to {}: {}", email, body);
        info!("Sent email to {} with body {}", email, body);
        Ok(())
    }
}

/// Validate `email` and send `body` with the console sender.
///
/// # Errors
///
/// `SendError::InvalidEmail` for a bad address, `SendError::EmptyBody` for an
/// empty body.
pub fn send_message(email: &str, body: &str) -> SendResult<()> {
    let email =
        EmailAddress::new(email).map_err(|e| SendError::InvalidEmail(e.value().to_string()))?;
    ConsoleSender.send(&email, body)
}
