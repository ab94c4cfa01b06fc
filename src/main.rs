//! Morning Greetings - Main entry point
//!
//! Imports contacts from the files given on the command line, generates a
//! greeting for each one and sends them in preferred-time order.

use anyhow::{Context, Result};
use clap::Parser;
use morning_greetings::cli::Cli;
use morning_greetings::logging::init_logging;
use morning_greetings::messaging::{deliver_greetings, plan_greetings, ConsoleSender};
use morning_greetings::{Config, ContactBook, ContactImporter};
use tracing::{debug, error, info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply_to(&mut config);

    // Held until exit so the file writer flushes
    let _log_guard = init_logging(&config.logging)?;
    info!("Logging to {}", config.logging.file_path.display());

    let modes = cli.modes();
    if modes.is_empty() {
        warn!("No contact sources given; use --csv, --json or --txt");
        return Ok(());
    }
    debug!("Import modes: {:?}", modes);

    let importer = ContactImporter::new(cli.import_options(&config)?);
    let report = match importer.import_all(&modes, &cli.sources()) {
        Ok(report) => report,
        Err(e) => {
            error!("Contact import failed: {}", e);
            return Err(e.into());
        }
    };
    info!("Initialized contact list with {} contacts", report.contacts.len());
    if !report.rejected.is_empty() {
        warn!("{} records were skipped", report.rejected.len());
    }

    let book = ContactBook::from(report);

    if cli.list_only {
        if !book.is_empty() {
            println!("{}", book);
        }
        return Ok(());
    }

    let greetings = plan_greetings(book.contacts());
    let delivery = deliver_greetings(&greetings, &ConsoleSender);

    if !delivery.failed.is_empty() {
        warn!("{} greetings could not be sent", delivery.failed.len());
    }

    info!("Morning greetings complete");
    Ok(())
}
