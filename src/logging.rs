//! Process-wide logging setup.
//!
//! Events at `console_level` and above go to stderr; everything at
//! `file_level` and above goes to a size-rotated log file. `init_logging` is
//! called once from `main`; library code only emits `tracing` events.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level printed to the console (default: INFO)
    pub console_level: Level,

    /// Minimum level written to the log file (default: DEBUG)
    pub file_level: Level,

    /// Log file location (default: `morning_greetings.log`)
    pub file_path: PathBuf,

    /// Size at which the log file is rotated (default: 3 MB)
    pub file_max_bytes: u64,

    /// Rotated files kept next to the active one (default: 3)
    pub backup_count: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: Level::INFO,
            file_level: Level::DEBUG,
            file_path: PathBuf::from("morning_greetings.log"),
            file_max_bytes: 3_000_000,
            backup_count: 3,
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG`, when set, overrides the console level. The returned guard
/// flushes the file writer when dropped and must be held until exit.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file = RotatingFile::open(&config.file_path, config.file_max_bytes, config.backup_count)
        .with_context(|| format!("Failed to open log file {}", config.file_path.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.console_level.as_str().to_ascii_lowercase()));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(file_writer)
                .with_filter(LevelFilter::from_level(config.file_level)),
        )
        .try_init()
        .context("Logging was already initialized")?;

    debug!("Logging configuration loaded successfully");
    Ok(guard)
}

/// A log file that rolls over once it would grow past `max_bytes`.
///
/// On rollover `log.<n-1>` becomes `log.<n>` down to `log` becoming `log.1`;
/// the file beyond `backup_count` is deleted. With `backup_count == 0` the
/// active file is truncated instead.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    file: File,
    written: u64,
}

impl RotatingFile {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backup_count: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = Self::open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            file,
            written,
        })
    }

    /// Path of the `index`-th rotated file, e.g. `app.log.2`.
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn open_append(path: &Path) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.backup_count == 0 {
            self.file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.backup_count);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backup_count).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;

        self.file = Self::open_append(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
