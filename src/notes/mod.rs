//! Address-book-wide note storage.

mod note_store;

pub use note_store::NoteStore;
