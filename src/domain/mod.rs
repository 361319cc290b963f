//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact fields: names, phone
//! numbers, email addresses, birthdays and addresses. These value objects
//! validate at construction and on every mutation, so invalid data can never
//! be represented in a contact.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::{FieldKind, FieldValue};
pub use name::{Address, ContactName};
pub use phone::PhoneNumber;
