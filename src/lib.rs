//! Contact Organizer - a personal address book with tagged notes.
//!
//! This library keeps contact records (name, phones, email, birthday,
//! address) and free-text tagged notes, validates every field as it is set,
//! and answers "whose birthday is coming up?" queries.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for contact fields
//! - **models**: The contact record and the note
//! - **directory**: The address book, search and pagination
//! - **notes**: The address-book-wide note store
//! - **scheduling**: Upcoming birthday queries with an injectable clock
//! - **repositories**: Loading and saving address book snapshots
//! - **assistant**: The line-oriented command layer used by the binary
//! - **config**: Configuration from environment variables
//! - **error**: Error types for each area

pub mod assistant;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod notes;
pub mod repositories;
pub mod scheduling;

// Re-export commonly used types
pub use assistant::{Command, Session};
pub use config::Config;
pub use directory::{AddressBook, PageCursor, Pages};
pub use domain::{
    Address, Birthday, ContactName, EmailAddress, FieldKind, FieldValue, PhoneNumber,
    ValidationError,
};
pub use error::{
    CommandError, ConfigError, ContactError, DirectoryError, NoteError, ScheduleError,
    StorageError,
};
pub use models::{Contact, Note};
pub use notes::NoteStore;
pub use repositories::{JsonFileRepository, SnapshotRepository};
pub use scheduling::{upcoming_birthdays, BirthdayScheduler, Clock, FixedClock, SystemClock};
