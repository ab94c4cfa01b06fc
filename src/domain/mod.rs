//! Domain value objects and validators.
//!
//! This module contains type-safe wrappers for the three fields of a contact:
//! its name, email address and preferred greeting time. These value objects
//! validate at construction time, so a value of one of these types is always
//! well-formed. The free `validate_*` functions expose the same checks for
//! callers that only hold a string.

pub mod email;
pub mod errors;
pub mod name;
pub mod preferred_time;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::ContactName;
pub use preferred_time::PreferredTime;

/// Check that `email` is a syntactically valid email address.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` carrying the rejected string.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    EmailAddress::new(email).map(|_| ())
}

/// Check that `time` is a 24-hour `HHmm` string.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTime` carrying the rejected string.
pub fn validate_time(time: &str) -> Result<(), ValidationError> {
    PreferredTime::new(time).map(|_| ())
}

/// Check that `name` contains at least one non-whitespace character.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` carrying the rejected string.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    ContactName::new(name).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validators_mirror_value_objects() {
        assert!(validate_email("ola@example.com").is_ok());
        assert_eq!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
        assert!(validate_time("0830").is_ok());
        assert!(validate_time("2460").is_err());
        assert!(validate_name("Ola").is_ok());
        assert!(validate_name(" ").is_err());
    }
}
