//! Line-oriented command layer over the address book.
//!
//! Parses one command per input line, applies it to the book, prints the
//! outcome and saves the book after every change.

mod command;
mod session;

pub use command::{Command, HELP_TEXT};
pub use session::{Flow, Session};
