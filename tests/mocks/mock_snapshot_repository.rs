use contact_organizer::error::StorageResult;
use contact_organizer::{AddressBook, SnapshotRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock snapshot repository for testing.
///
/// Stores the snapshot as JSON in memory so saves go through the same
/// serialization path as the file repository.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotRepository {
    snapshot: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(book.to_json().unwrap());
        repo
    }

    pub fn raw_snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl SnapshotRepository for MockSnapshotRepository {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        self.track_call("load");
        match self.snapshot.lock().unwrap().as_deref() {
            Some(json) => Ok(Some(AddressBook::from_json(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.snapshot.lock().unwrap() = Some(book.to_json()?);
        Ok(())
    }
}
