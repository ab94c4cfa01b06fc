//! Command line interface.

use crate::config::{delimiter_byte, Config};
use crate::error::ConfigResult;
use crate::import::{ContactSources, ImportMode, ImportOptions, ImportPolicy, TxtDelimiter};
use clap::Parser;
use std::path::PathBuf;

/// Create a contact list to send morning greetings to.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "morning-greetings", author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file with `name,email,preferred_time` rows (repeatable)
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Vec<PathBuf>,

    /// JSON array/object file, or `.jsonl` with one object per line (repeatable)
    #[arg(long = "json", value_name = "PATH")]
    pub json: Vec<PathBuf>,

    /// Text file with one contact per line (repeatable)
    #[arg(long = "txt", value_name = "PATH")]
    pub txt: Vec<PathBuf>,

    /// CSV field delimiter (overrides MORNING_GREETINGS_CSV_DELIMITER)
    #[arg(long, value_name = "CHAR")]
    pub csv_sep: Option<char>,

    /// Text field delimiter (default: comma if present, else whitespace)
    #[arg(long, value_name = "CHAR")]
    pub txt_sep: Option<char>,

    /// Skip invalid records instead of aborting the import
    #[arg(long)]
    pub skip_invalid: bool,

    /// Log file path (overrides MORNING_GREETINGS_LOG_FILE)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the imported contacts without sending greetings
    #[arg(long)]
    pub list_only: bool,
}

impl Cli {
    /// Active import modes, in the order they are imported.
    pub fn modes(&self) -> Vec<ImportMode> {
        self.sources().modes()
    }

    pub fn sources(&self) -> ContactSources {
        ContactSources::new()
            .with_csv(self.csv.as_slice())
            .with_json(self.json.as_slice())
            .with_txt(self.txt.as_slice())
    }

    /// Reader options from flags, falling back to `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-ASCII `--csv-sep`.
    pub fn import_options(&self, config: &Config) -> ConfigResult<ImportOptions> {
        let csv_delimiter = match self.csv_sep {
            Some(c) => delimiter_byte("--csv-sep", c)?,
            None => config.csv_delimiter,
        };

        Ok(ImportOptions {
            csv_delimiter,
            txt_delimiter: self.txt_sep.map_or(TxtDelimiter::Auto, TxtDelimiter::Char),
            policy: if self.skip_invalid {
                ImportPolicy::SkipInvalid
            } else {
                ImportPolicy::FailFast
            },
        })
    }

    /// Apply flag overrides to a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file_path = path.clone();
        }
    }
}
