//! Contact model representing a person to greet.

use crate::domain::{ContactName, EmailAddress, PreferredTime, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::RawRecord;

/// A validated contact.
///
/// Fields are private and only reachable through validating constructors, so
/// a `Contact` with a bad email or time cannot exist. Deserializing also
/// validates every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    name: ContactName,
    email: EmailAddress,
    preferred_time: PreferredTime,
}

impl Contact {
    /// Build a contact, validating name, email and preferred time in that order.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        preferred_time: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            email: EmailAddress::new(email)?,
            preferred_time: PreferredTime::new(preferred_time)?,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn preferred_time(&self) -> &PreferredTime {
        &self.preferred_time
    }
}

impl TryFrom<RawRecord> for Contact {
    type Error = ValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Contact::new(raw.name, raw.email, raw.preferred_time)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Email: {}, Preferred Time: {}",
            self.name, self.email, self.preferred_time
        )
    }
}
