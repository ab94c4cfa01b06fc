//! Unvalidated records and where they came from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An in-memory keyed record, as accepted by the list reader.
pub type RawMap = HashMap<String, String>;

/// An unvalidated `(name, email, preferred_time)` triple extracted from a
/// source before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub email: String,
    pub preferred_time: String,
}

impl RawRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        preferred_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            preferred_time: preferred_time.into(),
        }
    }

    /// Build a record from positional fields in `name, email, preferred_time`
    /// order. Returns `None` unless exactly three fields are given.
    pub fn from_fields<I, S>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = fields.into_iter();
        let record = Self::new(fields.next()?, fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }
        Some(record)
    }
}

/// Position of a record inside its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// 1-based line number in a text file.
    Line(usize),
    /// 1-based element index in a list or JSON array.
    Entry(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "line {}", n),
            Self::Entry(n) => write!(f, "entry {}", n),
        }
    }
}

/// Where a record was read from: a source label (file path or `"list"`) and
/// its position inside that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOrigin {
    pub source: String,
    pub position: Position,
}

impl RecordOrigin {
    pub fn new(source: impl Into<String>, position: Position) -> Self {
        Self {
            source: source.into(),
            position,
        }
    }

    pub fn line(source: impl Into<String>, line: usize) -> Self {
        Self::new(source, Position::Line(line))
    }

    pub fn entry(source: impl Into<String>, entry: usize) -> Self {
        Self::new(source, Position::Entry(entry))
    }
}

impl fmt::Display for RecordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.position)
    }
}
