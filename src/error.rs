//! Error types for the contact organizer.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Contact, note, directory and schedule errors are recoverable: the
//! command layer reports them to the user and carries on. Storage and config
//! errors stop the binary.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the contact
    #[error("Phone {0} not found in the record")]
    PhoneNotFound(String),

    /// An email edit was requested but no email is set
    #[error("Contact has no email to edit")]
    NoEmailSet,
}

/// Errors that can occur when walking the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Pages must hold at least one record
    #[error("Page size must be greater than zero")]
    InvalidPageSize,
}

/// Errors that can occur when editing the note store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// The 1-based note index is outside the store
    #[error("Note index {index} out of range (store has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when querying upcoming birthdays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The day window was negative
    #[error("Number of days must be non-negative, got {0}")]
    NegativeDays(i64),
}

/// Errors that can occur while loading or saving a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors reported back to the user by the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line
    #[error("Empty command")]
    Empty,

    /// The first word is not a known command
    #[error("The command {0:?} was not found. Type help to see all commands")]
    Unknown(String),

    /// Wrong number or shape of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// An argument that should be a number is not
    #[error("Not a valid number: {0}")]
    InvalidNumber(String),

    /// No contact is filed under the given name
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Note(#[from] NoteError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with NoteError
pub type NoteResult<T> = Result<T, NoteError>;

/// Convenience type alias for Results with ScheduleError
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
