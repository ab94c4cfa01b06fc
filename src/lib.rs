//! Morning Greetings - import a contact list and greet everyone on it.
//!
//! This library reads contacts from in-memory records, CSV, JSON/JSONL or
//! plain text files, validates each contact's email address and preferred
//! send time, and generates a short greeting for every valid contact.
//!
//! # Architecture
//!
//! - **domain**: Validating value objects for names, emails and `HHmm` times
//! - **models**: The validated `Contact` and the raw records it is built from
//! - **import**: Format readers, the record normalizer and the import dispatcher
//! - **messaging**: Greeting generation, ordering and sending
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **logging**: Console and size-rotated file logging
//! - **cli**: Command line arguments

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod logging;
pub mod messaging;
pub mod models;

pub use config::Config;
pub use domain::{validate_email, validate_name, validate_time, ValidationError};
pub use error::{ConfigError, ErrorKind, ImportError, SendError};
pub use import::{
    import_contacts, ContactImporter, ContactSources, ImportMode, ImportOptions, ImportPolicy,
    ImportReport, IntoSources, TxtDelimiter,
};
pub use messaging::{generate_message, send_message, MessageSender};
pub use models::{Contact, ContactBook, RawMap, RawRecord, RecordOrigin};
