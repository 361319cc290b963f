//! Data models for the address book.
//!
//! This module contains the contact record and the tagged note.

pub mod contact;
pub mod note;

pub use contact::Contact;
pub use note::Note;
