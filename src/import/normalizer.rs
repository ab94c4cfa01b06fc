//! Record normalizer: raw record in, validated contact out.

use crate::error::{ImportError, ImportResult};
use crate::models::{Contact, RawRecord, RecordOrigin};
use tracing::debug;

/// Validate one raw record into a `Contact`.
///
/// Fields are checked in `name`, `email`, `preferred_time` order and taken
/// exactly as the reader produced them.
///
/// # Errors
///
/// Returns `InvalidName`, `InvalidEmail` or `InvalidTime` carrying `origin`
/// and the offending value.
pub fn normalize(raw: RawRecord, origin: &RecordOrigin) -> ImportResult<Contact> {
    let contact =
        Contact::try_from(raw).map_err(|e| ImportError::from_validation(e, origin.clone()))?;
    debug!("Added contact from {}: {}", origin, contact);
    Ok(contact)
}
