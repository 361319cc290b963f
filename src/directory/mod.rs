//! The address book: contacts keyed by name, plus the note store.
//!
//! Contacts are kept in insertion order, which is the order used for
//! listing, search results, birthday queries and pagination.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::{PageCursor, Pages};
