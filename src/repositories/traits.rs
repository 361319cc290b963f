use crate::directory::AddressBook;
use crate::error::StorageResult;

/// Repository for address book snapshots.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
pub trait SnapshotRepository: Send + Sync {
    /// Load the stored book, or `None` if nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<AddressBook>>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Load the stored book, starting empty if nothing has been saved yet.
    fn load_or_default(&self) -> StorageResult<AddressBook> {
        Ok(self.load()?.unwrap_or_default())
    }
}
