//! Domain validation errors.

use super::field::FieldKind;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not satisfy the format rule of its field kind.
    InvalidFormat { kind: FieldKind, value: String },

    /// The value could not be parsed into a calendar date.
    InvalidDateFormat { value: String, format: String },

    /// The contact name is empty.
    InvalidName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { kind, value } => {
                write!(f, "Invalid {} format: {}", kind, value)
            }
            Self::InvalidDateFormat { value, format } => {
                write!(f, "Invalid birthday date {:?}, expected format {}", value, format)
            }
            Self::InvalidName => write!(f, "Contact name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
