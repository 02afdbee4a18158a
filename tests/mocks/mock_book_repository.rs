use contact_book::book::AddressBook;
use contact_book::error::{StorageError, StorageResult};
use contact_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Provides an in-memory implementation of AddressBookRepository that can be
/// seeded with a saved book, forced to fail, and tracks method calls for
/// verification.
#[derive(Clone, Default)]
pub struct MockBookRepository {
    saved: Arc<Mutex<Option<AddressBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds a saved book.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(book);
        repo
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The last successfully saved book.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
