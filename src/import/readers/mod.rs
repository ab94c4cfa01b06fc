//! Format readers.
//!
//! Each reader turns one source into the records it contains, in source
//! order. A reader fails as a whole only when the source itself cannot be
//! read (`SourceUnavailable`); problems with individual rows are reported
//! per record so the dispatcher can decide whether to abort or skip.

pub mod csv_reader;
pub mod json_reader;
pub mod list_reader;
pub mod txt_reader;

pub use csv_reader::read_csv;
pub use json_reader::read_json;
pub use list_reader::read_list;
pub use txt_reader::read_txt;

use crate::error::{ImportError, ImportResult};
use crate::models::{RawRecord, RecordOrigin};
use std::fs;
use std::path::Path;

/// A raw record together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub origin: RecordOrigin,
    pub raw: RawRecord,
}

impl SourceRecord {
    pub fn new(origin: RecordOrigin, raw: RawRecord) -> Self {
        Self { origin, raw }
    }
}

/// Records produced by a reader. Each entry is either a raw record or the
/// record-level error found at that position.
pub type Records = Vec<ImportResult<SourceRecord>>;

/// Read a whole source file as UTF-8. The handle is closed before parsing starts.
pub(crate) fn read_source(path: &Path) -> ImportResult<String> {
    fs::read_to_string(path).map_err(|e| ImportError::source_unavailable(path, e))
}

pub(crate) fn source_label(path: &Path) -> String {
    path.display().to_string()
}

/// Build a positional record, or a `MalformedRow` naming the field count.
pub(crate) fn positional_record<'a>(
    origin: RecordOrigin,
    fields: impl IntoIterator<Item = &'a str>,
) -> ImportResult<SourceRecord> {
    let fields: Vec<&str> = fields.into_iter().collect();
    match RawRecord::from_fields(fields.iter().copied()) {
        Some(raw) => Ok(SourceRecord::new(origin, raw)),
        None => Err(ImportError::malformed(
            origin,
            format!(
                "expected 3 fields (name, email, preferred_time), found {}",
                fields.len()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn test_positional_record_field_count() {
        let origin = RecordOrigin::line("x.txt", 1);
        assert!(positional_record(origin.clone(), ["Ola", "ola@example.com", "0830"]).is_ok());

        let err = positional_record(origin, ["Ola", "ola@example.com"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRow);
        assert!(err.to_string().contains("found 2"));
    }
}
