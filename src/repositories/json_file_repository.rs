use crate::directory::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::repositories::traits::SnapshotRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Snapshot repository backed by a pretty-printed JSON file.
///
/// Saves go to a sibling temporary file which is then renamed over the
/// target, so readers never observe a partially written snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a new JsonFileRepository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SnapshotRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book = AddressBook::from_json(&json)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            notes = book.notes().len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = book.to_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            notes = book.notes().len(),
            "Saved address book"
        );
        Ok(())
    }
}
