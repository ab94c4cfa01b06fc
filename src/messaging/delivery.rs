//! Greeting planning and delivery.

use super::generator::generate_message_with;
use super::sender::MessageSender;
use crate::domain::EmailAddress;
use crate::error::SendError;
use crate::models::Contact;
use chrono::{Local, NaiveTime};
use rand::Rng;
use tracing::{debug, error, info};

/// A generated greeting addressed to one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub contact: Contact,
    pub message: String,
}

/// Result of delivering a batch of greetings.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: Vec<(EmailAddress, SendError)>,
}

/// Generate a greeting per contact, ordered by preferred time.
///
/// The sort is stable, so contacts sharing a time keep their import order.
pub fn plan_greetings(contacts: &[Contact]) -> Vec<Greeting> {
    plan_greetings_with(contacts, &mut rand::thread_rng())
}

pub fn plan_greetings_with<R>(contacts: &[Contact], rng: &mut R) -> Vec<Greeting>
where
    R: Rng + ?Sized,
{
    let mut greetings: Vec<Greeting> = contacts
        .iter()
        .filter_map(|contact| match generate_message_with(contact.name().as_str(), rng) {
            Ok(message) => Some(Greeting {
                contact: contact.clone(),
                message,
            }),
            Err(e) => {
                error!("Could not create a greeting for {}: {}", contact, e);
                None
            }
        })
        .collect();

    greetings.sort_by(|a, b| a.contact.preferred_time().cmp(b.contact.preferred_time()));
    greetings
}

/// Send every greeting in order. A failed send is logged and recorded, and
/// delivery continues with the next greeting.
pub fn deliver_greetings<S>(greetings: &[Greeting], sender: &S) -> DeliveryReport
where
    S: MessageSender + ?Sized,
{
    deliver_greetings_at(greetings, sender, Local::now().time())
}

pub(crate) fn deliver_greetings_at<S>(
    greetings: &[Greeting],
    sender: &S,
    now: NaiveTime,
) -> DeliveryReport
where
    S: MessageSender + ?Sized,
{
    let mut report = DeliveryReport::default();

    for greeting in greetings {
        let contact = &greeting.contact;
        if contact.preferred_time().as_naive_time() > now {
            debug!(
                "Preferred time {} for {} has not been reached yet",
                contact.preferred_time(),
                contact.name()
            );
        }

        match sender.send(contact.email(), &greeting.message) {
            Ok(()) => report.sent += 1,
            Err(e) => {
                error!("Failed to send a greeting to {}: {}", contact.email(), e);
                report.failed.push((contact.email().clone(), e));
            }
        }
    }

    info!(
        "Delivered {} greetings ({} failed)",
        report.sent,
        report.failed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SendResult;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    struct RecordingSender {
        sent: RefCell<Vec<String>>,
        reject: &'static str,
    }

    impl MessageSender for RecordingSender {
        fn send(&self, email: &EmailAddress, _body: &str) -> SendResult<()> {
            if email.as_str() == self.reject {
                return Err(SendError::Delivery("mailbox full".to_string()));
            }
            self.sent.borrow_mut().push(email.to_string());
            Ok(())
        }
    }

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new("Late", "late@example.com", "1130").unwrap(),
            Contact::new("Early", "early@example.com", "0600").unwrap(),
            Contact::new("Tie", "tie@example.com", "1130").unwrap(),
        ]
    }

    #[test]
    fn test_plan_greetings_orders_by_time_stably() {
        let greetings = plan_greetings_with(&contacts(), &mut StdRng::seed_from_u64(1));
        let names: Vec<&str> = greetings.iter().map(|g| g.contact.name().as_str()).collect();
        assert_eq!(names, vec!["Early", "Late", "Tie"]);
        assert!(greetings.iter().all(|g| g.message.contains(g.contact.name().as_str())));
    }

    #[test]
    fn test_deliver_continues_after_failure() {
        let greetings = plan_greetings(&contacts());
        let sender = RecordingSender {
            sent: RefCell::new(Vec::new()),
            reject: "late@example.com",
        };
        let report = deliver_greetings_at(&greetings, &sender, NaiveTime::MIN);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0.as_str(), "late@example.com");
        assert_eq!(
            *sender.sent.borrow(),
            vec!["early@example.com".to_string(), "tie@example.com".to_string()]
        );
    }
}
