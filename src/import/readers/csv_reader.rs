//! CSV reader for header-less `name,email,preferred_time` rows.

use super::{positional_record, read_source, source_label, Records};
use crate::error::{ImportError, ImportResult};
use crate::models::RecordOrigin;
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Default CSV field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Read every row of a CSV file.
///
/// Rows are interpreted positionally, fields are trimmed, and blank lines are
/// skipped. Quoting follows the usual CSV rules, so `"Nordmann, Ola"` is one
/// field. A row that does not have exactly three fields is a `MalformedRow`
/// for that line.
///
/// # Errors
///
/// Returns `ImportError::SourceUnavailable` if the file cannot be read or is
/// not valid UTF-8.
pub fn read_csv(path: &Path, delimiter: u8) -> ImportResult<Records> {
    let content = read_source(path)?;
    Ok(parse_csv(&content, &source_label(path), delimiter))
}

fn parse_csv(content: &str, label: &str, delimiter: u8) -> Records {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(row) => {
                // whitespace-only line
                if row.len() == 1 && row.get(0).is_some_and(str::is_empty) {
                    continue;
                }
                let line = row.position().map_or(index + 1, |p| p.line() as usize);
                records.push(positional_record(RecordOrigin::line(label, line), row.iter()));
            }
            Err(e) => {
                let line = e.position().map_or(index + 1, |p| p.line() as usize);
                records.push(Err(ImportError::malformed(
                    RecordOrigin::line(label, line),
                    e.to_string(),
                )));
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::RawRecord;

    fn raws(records: &Records) -> Vec<RawRecord> {
        records
            .iter()
            .map(|r| r.as_ref().unwrap().raw.clone())
            .collect()
    }

    #[test]
    fn test_parse_csv_rows_in_order() {
        let records = parse_csv(
            "Ola,ola@example.com,0830\nKari, kari@example.com , 0915\n",
            "a.csv",
            DEFAULT_DELIMITER,
        );
        assert_eq!(
            raws(&records),
            vec![
                RawRecord::new("Ola", "ola@example.com", "0830"),
                RawRecord::new("Kari", "kari@example.com", "0915"),
            ]
        );
        assert_eq!(records[1].as_ref().unwrap().origin, RecordOrigin::line("a.csv", 2));
    }

    #[test]
    fn test_parse_csv_custom_delimiter_and_quotes() {
        let records = parse_csv(
            "\"Nordmann, Ola\";ola@example.com;0830\r\n",
            "a.csv",
            b';',
        );
        assert_eq!(
            raws(&records),
            vec![RawRecord::new("Nordmann, Ola", "ola@example.com", "0830")]
        );
    }

    #[test]
    fn test_parse_csv_skips_blank_lines_and_keeps_line_numbers() {
        let records = parse_csv(
            "Ola,ola@example.com,0830\n\n   \nKari,kari@example.com,0915\n",
            "a.csv",
            DEFAULT_DELIMITER,
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_ref().unwrap().origin, RecordOrigin::line("a.csv", 4));
    }

    #[test]
    fn test_parse_csv_short_and_long_rows_are_malformed() {
        let records = parse_csv(
            "Ola,ola@example.com\nKari,kari@example.com,0915,extra\n",
            "a.csv",
            DEFAULT_DELIMITER,
        );
        assert_eq!(records.len(), 2);
        for (i, record) in records.iter().enumerate() {
            let err = record.as_ref().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedRow);
            assert_eq!(err.origin(), Some(&RecordOrigin::line("a.csv", i + 1)));
        }
    }

    #[test]
    fn test_read_csv_missing_file() {
        let err = read_csv(Path::new("no/such/contacts.csv"), DEFAULT_DELIMITER).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    }
}
