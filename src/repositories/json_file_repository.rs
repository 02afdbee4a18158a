//! JSON file storage for the address book.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "records": [
//!     { "name": "john", "phones": ["1234567890"], "birthday": "15.03.1990" }
//!   ]
//! }
//! ```
//!
//! Saves are atomic: the snapshot is written to `<file>.tmp`, the previous
//! file is copied to `<file>.backup`, then the temp file is renamed over the
//! original. A file that fails to parse is recovered from the backup.

use super::traits::AddressBookRepository;
use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when no path is configured.
pub const DEFAULT_FILENAME: &str = "addressbook.json";

/// Snapshot format version
const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: &'a str,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Snapshot {
    version: String,
    records: Vec<Record>,
}

/// Address book repository backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        with_suffix(&self.path, ".backup")
    }

    fn temp_path(&self) -> PathBuf {
        with_suffix(&self.path, ".tmp")
    }

    /// Read and parse one snapshot file. `Ok(None)` if the file is absent.
    fn read_snapshot(path: &Path) -> StorageResult<Option<AddressBook>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Data file does not exist: {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(io_error(path, e)),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupted {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                "Data file version mismatch: expected {}, got {}. Attempting to load anyway.",
                SNAPSHOT_VERSION,
                snapshot.version
            );
        }

        Ok(Some(snapshot.records.into_iter().collect()))
    }

    fn recover_from_backup(&self, original: StorageError) -> StorageResult<AddressBook> {
        tracing::warn!("{}. Attempting recovery from backup.", original);

        let backup_path = self.backup_path();
        match Self::read_snapshot(&backup_path) {
            Ok(Some(book)) => {
                tracing::info!("Recovered address book from backup: {} records", book.len());
                if let Err(e) = fs::copy(&backup_path, &self.path) {
                    tracing::error!("Failed to restore data file from backup: {}", e);
                }
                Ok(book)
            }
            Ok(None) => {
                tracing::warn!("No backup file found.");
                Err(original)
            }
            Err(backup_err) => {
                tracing::error!("Backup also unusable: {}", backup_err);
                Err(original)
            }
        }
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        match Self::read_snapshot(&self.path) {
            Ok(Some(book)) => {
                tracing::debug!(
                    "Loaded {} records from {}",
                    book.len(),
                    self.path.display()
                );
                Ok(book)
            }
            Ok(None) => Ok(AddressBook::new()),
            Err(e @ StorageError::Corrupted { .. }) => self.recover_from_backup(e),
            Err(e) => Err(e),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            }
        }

        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            records: book.records().collect(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| io_error(&temp_path, e))?;

        if self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                tracing::warn!("Failed to create backup: {}", e);
            }
        }

        fs::rename(&temp_path, &self.path).map_err(|e| io_error(&self.path, e))?;

        tracing::debug!("Saved {} records to {}", book.len(), self.path.display());
        Ok(())
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_paths() {
        let repo = JsonFileRepository::new("/data/book.json");
        assert_eq!(repo.backup_path(), PathBuf::from("/data/book.json.backup"));
        assert_eq!(repo.temp_path(), PathBuf::from("/data/book.json.tmp"));
    }

    #[test]
    fn test_default_path() {
        let repo = JsonFileRepository::default();
        assert_eq!(repo.path(), Path::new(DEFAULT_FILENAME));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));
        assert!(repo.load().unwrap().is_empty());
    }
}
