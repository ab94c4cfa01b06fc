//! JSON and JSON Lines reader.

use super::{read_source, source_label, Records, SourceRecord};
use crate::error::{ImportError, ImportResult};
use crate::models::{RawRecord, RecordOrigin};
use serde_json::Value;
use std::ffi::OsStr;
use std::path::Path;

/// Read contacts from a `.json` or `.jsonl` file.
///
/// A `.jsonl` file (extension compared case-insensitively) holds one object
/// per non-empty line. Any other file is a single JSON document: either an
/// array of objects or one object. Objects must carry string `name`, `email`
/// and `preferred_time` keys.
///
/// # Errors
///
/// Returns `ImportError::SourceUnavailable` if the file cannot be read or is
/// not valid UTF-8.
pub fn read_json(path: &Path) -> ImportResult<Records> {
    let content = read_source(path)?;
    let label = source_label(path);

    if is_jsonl(path) {
        Ok(parse_lines(&content, &label))
    } else {
        Ok(parse_document(&content, &label))
    }
}

pub fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
}

fn parse_lines(content: &str, label: &str) -> Records {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let origin = RecordOrigin::line(label, index + 1);
            match serde_json::from_str::<Value>(line) {
                Ok(value) => record_from_value(value, origin),
                Err(e) => Err(ImportError::malformed(origin, format!("invalid JSON: {}", e))),
            }
        })
        .collect()
}

fn parse_document(content: &str, label: &str) -> Records {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_from_value(item, RecordOrigin::entry(label, index + 1)))
            .collect(),
        Ok(value @ Value::Object(_)) => vec![record_from_value(value, RecordOrigin::entry(label, 1))],
        Ok(other) => vec![Err(ImportError::malformed(
            RecordOrigin::entry(label, 1),
            format!("expected an array of objects or an object, found {}", json_type(&other)),
        ))],
        Err(e) => vec![Err(ImportError::malformed(
            RecordOrigin::line(label, e.line()),
            format!("invalid JSON: {}", e),
        ))],
    }
}

fn record_from_value(value: Value, origin: RecordOrigin) -> ImportResult<SourceRecord> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ImportError::malformed(
                origin,
                format!("expected a JSON object, found {}", json_type(&other)),
            ))
        }
    };

    let field = |key: &'static str| match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(ImportError::MissingField {
            origin: origin.clone(),
            field: key,
        }),
        Some(other) => Err(ImportError::malformed(
            origin.clone(),
            format!("field `{}` must be a string, found {}", key, json_type(other)),
        )),
    };

    let raw = RawRecord::new(field("name")?, field("email")?, field("preferred_time")?);
    Ok(SourceRecord::new(origin, raw))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_is_jsonl() {
        assert!(is_jsonl(Path::new("contacts.jsonl")));
        assert!(is_jsonl(Path::new("dir/CONTACTS.JSONL")));
        assert!(!is_jsonl(Path::new("contacts.json")));
        assert!(!is_jsonl(Path::new("jsonl")));
    }

    #[test]
    fn test_parse_document_array() {
        let records = parse_document(
            r#"[{"name":"Ola","email":"ola@example.com","preferred_time":"0830"},
                {"name":"Kari","email":"kari@example.com","preferred_time":"0915"}]"#,
            "c.json",
        );
        assert_eq!(records.len(), 2);
        let second = records[1].as_ref().unwrap();
        assert_eq!(second.raw, RawRecord::new("Kari", "kari@example.com", "0915"));
        assert_eq!(second.origin, RecordOrigin::entry("c.json", 2));
    }

    #[test]
    fn test_parse_document_single_object() {
        let records = parse_document(
            r#"{"name":"Ola","email":"ola@example.com","preferred_time":"0830"}"#,
            "c.json",
        );
        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());
    }

    #[test]
    fn test_parse_document_rejects_bad_shapes() {
        let records = parse_document("42", "c.json");
        assert_eq!(records[0].as_ref().unwrap_err().kind(), ErrorKind::MalformedRow);

        let records = parse_document(r#"[1, {"name":"Ola"}]"#, "c.json");
        assert_eq!(records[0].as_ref().unwrap_err().kind(), ErrorKind::MalformedRow);
        assert_eq!(records[1].as_ref().unwrap_err().kind(), ErrorKind::MissingField);

        let records = parse_document("[{\n\"name\": }", "c.json");
        let err = records[0].as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRow);
        assert_eq!(err.origin(), Some(&RecordOrigin::line("c.json", 2)));
    }

    #[test]
    fn test_non_string_field_is_malformed() {
        let records = parse_document(
            r#"{"name":"Ola","email":"ola@example.com","preferred_time":830}"#,
            "c.json",
        );
        let err = records[0].as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRow);
        assert!(err.to_string().contains("`preferred_time` must be a string"));
    }

    #[test]
    fn test_parse_lines_names_failing_line() {
        let content = concat!(
            r#"{"name":"Ola","email":"ola@example.com","preferred_time":"0830"}"#,
            "\n\n",
            r#"{"name":"Kari","email":"#,
            "\n",
            r#"{"name":"Per","email":"per@example.com","preferred_time":"1000"}"#,
            "\n"
        );
        let records = parse_lines(content, "c.jsonl");
        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        let err = records[1].as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRow);
        assert_eq!(err.origin(), Some(&RecordOrigin::line("c.jsonl", 3)));
        assert!(records[2].is_ok());
    }
}
