//! In-memory list reader.

use super::{Records, SourceRecord};
use crate::error::ImportError;
use crate::models::{RawMap, RawRecord, RecordOrigin};

/// Source label used in error messages for in-memory records.
pub const LIST_SOURCE: &str = "list";

/// Extract records from keyed maps. Values are looked up by key, never by
/// position; a missing key yields `MissingField` for that entry.
pub fn read_list(records: &[RawMap]) -> Records {
    records
        .iter()
        .enumerate()
        .map(|(index, map)| {
            let origin = RecordOrigin::entry(LIST_SOURCE, index + 1);
            let field = |key: &'static str| {
                map.get(key).cloned().ok_or_else(|| ImportError::MissingField {
                    origin: origin.clone(),
                    field: key,
                })
            };
            let raw = RawRecord::new(field("name")?, field("email")?, field("preferred_time")?);
            Ok(SourceRecord::new(origin, raw))
        })
        .collect()
}
