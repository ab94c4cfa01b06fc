//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected value so callers can report exactly
/// what was wrong with a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace-only.
    InvalidName(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided preferred time is not a 24-hour `HHmm` string.
    InvalidTime(String),
}

impl ValidationError {
    /// The rejected value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidName(v) | Self::InvalidEmail(v) | Self::InvalidTime(v) => v,
        }
    }

    /// Name of the contact field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "name",
            Self::InvalidEmail(_) => "email",
            Self::InvalidTime(_) => "preferred_time",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: {:?}", name),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {:?}", email),
            Self::InvalidTime(time) => {
                write!(f, "Invalid preferred time (expected HHmm): {:?}", time)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidEmail("nope".to_string());
        assert_eq!(err.to_string(), "Invalid email address: \"nope\"");

        let err = ValidationError::InvalidTime("2460".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid preferred time (expected HHmm): \"2460\""
        );
    }

    #[test]
    fn test_validation_error_field_and_value() {
        let err = ValidationError::InvalidName("  ".to_string());
        assert_eq!(err.field(), "name");
        assert_eq!(err.value(), "  ");
        assert_eq!(ValidationError::InvalidTime(String::new()).field(), "preferred_time");
    }
}
