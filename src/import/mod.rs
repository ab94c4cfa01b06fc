//! Contact import dispatcher.
//!
//! `import_contacts` is the public entry point: given an `ImportMode` and a
//! bundle of `ContactSources`, it routes the sources of that kind to the
//! matching reader, normalizes every record and collects the contacts.
//!
//! # Policies
//!
//! - `ImportPolicy::FailFast` (default): the first invalid record aborts the
//!   whole call and no contacts are returned.
//! - `ImportPolicy::SkipInvalid`: record-level errors are collected in the
//!   `ImportReport` and the remaining records are still imported. Unreadable
//!   sources always abort.
//!
//! # Example
//!
//! ```
//! use morning_greetings::import::{import_contacts, ContactSources, ImportMode};
//! use morning_greetings::models::RawMap;
//!
//! let ola: RawMap = [("name", "Ola"), ("email", "ola@example.com"), ("preferred_time", "0830")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//! let sources = ContactSources::new().with_list([ola]);
//!
//! let contacts = import_contacts(Some(ImportMode::List), &sources).unwrap();
//! assert_eq!(contacts.len(), 1);
//!
//! // No mode selected: sources are ignored.
//! assert!(import_contacts(None, &sources).unwrap().is_empty());
//! ```

pub mod normalizer;
pub mod readers;

pub use normalizer::normalize;
pub use readers::txt_reader::TxtDelimiter;
pub use readers::{Records, SourceRecord};

use crate::error::{ImportError, ImportResult};
use crate::models::{Contact, ContactBook, RawMap};
use readers::csv_reader::DEFAULT_DELIMITER;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which source format an import call reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportMode {
    List,
    Csv,
    Json,
    Txt,
}

impl ImportMode {
    /// Every mode, in the order a multi-mode import visits them.
    pub const ALL: [ImportMode; 4] = [Self::List, Self::Csv, Self::Json, Self::Txt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "LIST",
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs an import may draw from. Only the kind matching the active mode is read.
#[derive(Debug, Clone, Default)]
pub struct ContactSources {
    pub list: Vec<RawMap>,
    pub csv: Vec<PathBuf>,
    pub json: Vec<PathBuf>,
    pub txt: Vec<PathBuf>,
}

impl ContactSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = RawMap>,
    {
        self.list.extend(records);
        self
    }

    pub fn with_csv(mut self, paths: impl IntoSources) -> Self {
        self.csv.extend(paths.into_sources());
        self
    }

    pub fn with_json(mut self, paths: impl IntoSources) -> Self {
        self.json.extend(paths.into_sources());
        self
    }

    pub fn with_txt(mut self, paths: impl IntoSources) -> Self {
        self.txt.extend(paths.into_sources());
        self
    }

    /// Modes for which at least one source is present, in `ImportMode::ALL` order.
    pub fn modes(&self) -> Vec<ImportMode> {
        ImportMode::ALL
            .into_iter()
            .filter(|mode| !self.is_empty_for(*mode))
            .collect()
    }

    fn is_empty_for(&self, mode: ImportMode) -> bool {
        match mode {
            ImportMode::List => self.list.is_empty(),
            ImportMode::Csv => self.csv.is_empty(),
            ImportMode::Json => self.json.is_empty(),
            ImportMode::Txt => self.txt.is_empty(),
        }
    }
}

/// One or more file paths handed to a `ContactSources` builder.
///
/// A single path is always one source; `Path` and `PathBuf` are never
/// split into their components.
pub trait IntoSources {
    fn into_sources(self) -> Vec<PathBuf>;
}

impl IntoSources for PathBuf {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![self]
    }
}

impl IntoSources for &PathBuf {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![self.clone()]
    }
}

impl IntoSources for &Path {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![self.to_path_buf()]
    }
}

impl IntoSources for String {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoSources for &String {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoSources for &str {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl<P: Into<PathBuf>> IntoSources for Vec<P> {
    fn into_sources(self) -> Vec<PathBuf> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<P: Into<PathBuf>, const N: usize> IntoSources for [P; N] {
    fn into_sources(self) -> Vec<PathBuf> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<P: AsRef<Path>> IntoSources for &[P] {
    fn into_sources(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

/// What to do when a single record is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPolicy {
    /// Abort the whole import on the first error.
    #[default]
    FailFast,
    /// Skip invalid records and report them alongside the valid contacts.
    SkipInvalid,
}

/// Reader and policy settings for a `ContactImporter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Single-byte CSV field delimiter (default `,`)
    pub csv_delimiter: u8,

    /// Text file field delimiter (default: comma or whitespace)
    pub txt_delimiter: TxtDelimiter,

    pub policy: ImportPolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            csv_delimiter: DEFAULT_DELIMITER,
            txt_delimiter: TxtDelimiter::Auto,
            policy: ImportPolicy::FailFast,
        }
    }
}

/// Outcome of an import: accepted contacts in source order and, under
/// `ImportPolicy::SkipInvalid`, the records that were rejected.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub contacts: Vec<Contact>,
    pub rejected: Vec<ImportError>,
}

impl ImportReport {
    fn extend(&mut self, other: ImportReport) {
        self.contacts.extend(other.contacts);
        self.rejected.extend(other.rejected);
    }
}

impl From<ImportReport> for ContactBook {
    fn from(report: ImportReport) -> Self {
        report.contacts.into_iter().collect()
    }
}

/// Imports contacts with a fixed set of `ImportOptions`.
#[derive(Debug, Clone, Default)]
pub struct ContactImporter {
    options: ImportOptions,
}

impl ContactImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Import the sources matching `mode` and return the contacts.
    ///
    /// `None` is a no-op returning no contacts.
    ///
    /// # Errors
    ///
    /// Under `FailFast`, the first error of any kind. Under `SkipInvalid`,
    /// only `SourceUnavailable` and `NoSources`.
    pub fn import(
        &self,
        mode: Option<ImportMode>,
        sources: &ContactSources,
    ) -> ImportResult<Vec<Contact>> {
        self.import_report(mode, sources).map(|report| report.contacts)
    }

    /// Like `import`, but also returns the records rejected under `SkipInvalid`.
    ///
    /// A selected mode with no sources of its kind is a caller error
    /// (`NoSources`), not an empty import. Sources of other kinds are ignored.
    pub fn import_report(
        &self,
        mode: Option<ImportMode>,
        sources: &ContactSources,
    ) -> ImportResult<ImportReport> {
        let Some(mode) = mode else {
            debug!("No import mode selected, ignoring sources");
            return Ok(ImportReport::default());
        };

        let mut report = ImportReport::default();

        match mode {
            ImportMode::List => {
                if sources.list.is_empty() {
                    return Err(ImportError::NoSources(mode));
                }
                self.collect(readers::read_list(&sources.list), &mut report)?;
            }
            ImportMode::Csv => self.import_files(mode, &sources.csv, &mut report, |path| {
                readers::read_csv(path, self.options.csv_delimiter)
            })?,
            ImportMode::Json => {
                self.import_files(mode, &sources.json, &mut report, readers::read_json)?
            }
            ImportMode::Txt => self.import_files(mode, &sources.txt, &mut report, |path| {
                readers::read_txt(path, self.options.txt_delimiter)
            })?,
        }

        info!(
            "Imported {} contacts using {} mode ({} rejected)",
            report.contacts.len(),
            mode,
            report.rejected.len()
        );

        Ok(report)
    }

    /// Import several modes in the order given and concatenate the results.
    pub fn import_all(
        &self,
        modes: &[ImportMode],
        sources: &ContactSources,
    ) -> ImportResult<ImportReport> {
        let mut report = ImportReport::default();
        for mode in modes {
            report.extend(self.import_report(Some(*mode), sources)?);
        }
        Ok(report)
    }

    fn import_files<F>(
        &self,
        mode: ImportMode,
        paths: &[PathBuf],
        report: &mut ImportReport,
        read: F,
    ) -> ImportResult<()>
    where
        F: Fn(&Path) -> ImportResult<Records>,
    {
        if paths.is_empty() {
            return Err(ImportError::NoSources(mode));
        }

        for path in paths {
            debug!("Reading {} contacts from {}", mode, path.display());
            self.collect(read(path)?, report)?;
        }

        Ok(())
    }

    fn collect(&self, records: Records, report: &mut ImportReport) -> ImportResult<()> {
        for record in records {
            match record.and_then(|r| normalize(r.raw, &r.origin)) {
                Ok(contact) => report.contacts.push(contact),
                Err(e) if self.options.policy == ImportPolicy::SkipInvalid && e.is_record_level() => {
                    warn!("Skipping invalid record: {}", e);
                    report.rejected.push(e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// Import contacts with default options and fail-fast policy.
///
/// # Errors
///
/// The first `ImportError` encountered; see `ContactImporter::import`.
pub fn import_contacts(
    mode: Option<ImportMode>,
    sources: &ContactSources,
) -> ImportResult<Vec<Contact>> {
    ContactImporter::default().import(mode, sources)
}
