use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over where the book is kept, enabling different
/// implementations (JSON file, in-memory mock).
pub trait AddressBookRepository {
    /// Load the saved book, or an empty one when nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}

/// Load the saved book, falling back to an empty one on any error.
///
/// Startup must not fail because of a bad data file, so the error is logged
/// rather than returned.
pub fn load_or_default(repo: &dyn AddressBookRepository) -> AddressBook {
    match repo.load() {
        Ok(book) => book,
        Err(e) => {
            tracing::error!("Failed to load address book, starting empty: {}", e);
            AddressBook::new()
        }
    }
}
