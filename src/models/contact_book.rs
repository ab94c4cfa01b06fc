//! An editable list of validated contacts.

use crate::domain::ValidationError;
use std::fmt;
use tracing::info;

use super::contact::Contact;

/// Preferred time used by `ContactBook::add` when none is given.
pub const DEFAULT_PREFERRED_TIME: &str = "0800";

/// Contacts in insertion order.
///
/// Every entry went through `Contact::new`, so the book never holds an
/// invalid contact. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to be greeted at `DEFAULT_PREFERRED_TIME`.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first invalid field; the book is
    /// left unchanged.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.add_at(name, email, DEFAULT_PREFERRED_TIME)
    }

    /// Add a contact with an explicit `HHmm` preferred time.
    ///
    /// # Errors
    ///
    /// Same as `add`.
    pub fn add_at(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        preferred_time: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let contact = Contact::new(name, email, preferred_time)?;
        self.push(contact);
        Ok(())
    }

    pub fn push(&mut self, contact: Contact) {
        info!("Added contact to list: {}", contact);
        self.contacts.push(contact);
    }

    /// Remove every contact named exactly `name` and return how many went.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.name().as_str() != name);
        let removed = before - self.contacts.len();
        info!("Removed {} from contact list ({} entries)", name, removed);
        removed
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl Extend<Contact> for ContactBook {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, iter: I) {
        self.contacts.extend(iter);
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ContactBook {
    type Item = Contact;
    type IntoIter = std::vec::IntoIter<Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.into_iter()
    }
}

/// One `Name: …, Email: …, Preferred Time: …` line per contact.
impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, contact) in self.contacts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", contact)?;
        }
        Ok(())
    }
}
