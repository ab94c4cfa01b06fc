//! Data models for contacts and the raw records they are built from.

pub mod contact;
pub mod contact_book;
pub mod record;

pub use contact::Contact;
pub use contact_book::{ContactBook, DEFAULT_PREFERRED_TIME};
pub use record::{Position, RawMap, RawRecord, RecordOrigin};
