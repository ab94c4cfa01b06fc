//! Error types for the morning greetings pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use crate::import::ImportMode;
use crate::models::RecordOrigin;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing contacts.
///
/// Record-level variants carry the `RecordOrigin` (source path or `"list"`,
/// plus line or entry number) so a caller can point at the exact input to fix.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Email failed the address grammar check
    #[error("{origin}: invalid email address {value:?}")]
    InvalidEmail { origin: RecordOrigin, value: String },

    /// Preferred time is not a 24-hour HHmm string
    #[error("{origin}: invalid preferred time {value:?} (expected HHmm)")]
    InvalidTime { origin: RecordOrigin, value: String },

    /// Name is empty or whitespace-only
    #[error("{origin}: invalid name {value:?}")]
    InvalidName { origin: RecordOrigin, value: String },

    /// A keyed record lacks one of the required keys
    #[error("{origin}: missing field `{field}`")]
    MissingField {
        origin: RecordOrigin,
        field: &'static str,
    },

    /// A row or line cannot be turned into a record
    #[error("{origin}: malformed record: {reason}")]
    MalformedRow { origin: RecordOrigin, reason: String },

    /// The source file could not be opened, read or decoded
    #[error("cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An import mode was selected but no sources of that kind were given
    #[error("import mode {0} was selected but no sources were provided")]
    NoSources(ImportMode),
}

/// Discriminant of an `ImportError`, for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidEmail,
    InvalidTime,
    InvalidName,
    MissingField,
    MalformedRow,
    SourceUnavailable,
    NoSources,
}

impl ImportError {
    /// Attach a record origin to a field validation failure.
    pub fn from_validation(error: ValidationError, origin: RecordOrigin) -> Self {
        match error {
            ValidationError::InvalidEmail(value) => Self::InvalidEmail { origin, value },
            ValidationError::InvalidTime(value) => Self::InvalidTime { origin, value },
            ValidationError::InvalidName(value) => Self::InvalidName { origin, value },
        }
    }

    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(origin: RecordOrigin, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            origin,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail { .. } => ErrorKind::InvalidEmail,
            Self::InvalidTime { .. } => ErrorKind::InvalidTime,
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::MalformedRow { .. } => ErrorKind::MalformedRow,
            Self::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            Self::NoSources(_) => ErrorKind::NoSources,
        }
    }

    /// The record this error refers to, if it refers to a single record.
    pub fn origin(&self) -> Option<&RecordOrigin> {
        match self {
            Self::InvalidEmail { origin, .. }
            | Self::InvalidTime { origin, .. }
            | Self::InvalidName { origin, .. }
            | Self::MissingField { origin, .. }
            | Self::MalformedRow { origin, .. } => Some(origin),
            Self::SourceUnavailable { .. } | Self::NoSources(_) => None,
        }
    }

    /// Whether the error concerns one record only, as opposed to a whole
    /// source or the call itself. Only these may be skipped by a tolerant import.
    pub fn is_record_level(&self) -> bool {
        self.origin().is_some()
    }
}

/// Errors that can occur when sending a greeting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// Recipient address failed validation
    #[error("Invalid recipient address: {0:?}")]
    InvalidEmail(String),

    /// Nothing to send
    #[error("No message body was provided")]
    EmptyBody,

    /// The transport refused or failed to deliver the message
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with SendError
pub type SendResult<T> = Result<T, SendError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::InvalidEmail {
            origin: RecordOrigin::line("contacts.csv", 2),
            value: "not-an-email".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "contacts.csv line 2: invalid email address \"not-an-email\""
        );

        let err = ImportError::MissingField {
            origin: RecordOrigin::entry("list", 1),
            field: "email",
        };
        assert_eq!(err.to_string(), "list entry 1: missing field `email`");

        let err = ImportError::NoSources(ImportMode::Csv);
        assert_eq!(
            err.to_string(),
            "import mode CSV was selected but no sources were provided"
        );

        let err = SendError::EmptyBody;
        assert_eq!(err.to_string(), "No message body was provided");
    }

    #[test]
    fn test_source_unavailable_names_path() {
        let err = ImportError::source_unavailable(
            "missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.to_string().contains("missing.csv"));
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert!(!err.is_record_level());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_validation_keeps_value_and_origin() {
        let origin = RecordOrigin::line("a.txt", 7);
        let err = ImportError::from_validation(
            ValidationError::InvalidTime("2460".to_string()),
            origin.clone(),
        );
        assert_eq!(err.kind(), ErrorKind::InvalidTime);
        assert_eq!(err.origin(), Some(&origin));
        assert!(err.is_record_level());
        match err {
            ImportError::InvalidTime { value, .. } => assert_eq!(value, "2460"),
            other => panic!("Expected InvalidTime, got: {:?}", other),
        }
    }
}
