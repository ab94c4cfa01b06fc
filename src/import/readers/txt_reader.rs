//! Plain text reader: one `name email preferred_time` record per line.

use super::{positional_record, read_source, source_label, Records};
use crate::error::ImportResult;
use crate::models::RecordOrigin;
use std::path::Path;

/// How fields are separated on a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxtDelimiter {
    /// Split on commas when the line has any, otherwise on runs of whitespace.
    #[default]
    Auto,
    /// Split on this character.
    Char(char),
}

/// Read every non-empty line of a text file as a positional record.
///
/// # Errors
///
/// Returns `ImportError::SourceUnavailable` if the file cannot be read or is
/// not valid UTF-8.
pub fn read_txt(path: &Path, delimiter: TxtDelimiter) -> ImportResult<Records> {
    let content = read_source(path)?;
    Ok(parse_txt(&content, &source_label(path), delimiter))
}

fn parse_txt(content: &str, label: &str, delimiter: TxtDelimiter) -> Records {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            positional_record(RecordOrigin::line(label, index + 1), split_line(line, delimiter))
        })
        .collect()
}

fn split_line(line: &str, delimiter: TxtDelimiter) -> Vec<&str> {
    match delimiter {
        TxtDelimiter::Char(c) => line.split(c).map(str::trim).collect(),
        TxtDelimiter::Auto if line.contains(',') => line.split(',').map(str::trim).collect(),
        TxtDelimiter::Auto => line.split_whitespace().collect(),
    }
}
