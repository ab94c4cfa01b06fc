//! Greeting generation and delivery.
//!
//! These are the downstream consumers of imported contacts: pick a greeting
//! for each contact, order them by preferred time and hand them to a
//! `MessageSender`.

pub mod delivery;
pub mod generator;
pub mod sender;

pub use delivery::{deliver_greetings, plan_greetings, plan_greetings_with, DeliveryReport, Greeting};
pub use generator::{generate_message, generate_message_with, GREETING_TEMPLATES};
pub use sender::{send_message, ConsoleSender, MessageSender};
