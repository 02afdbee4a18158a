mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, DEFAULT_FILENAME};
pub use traits::{load_or_default, AddressBookRepository};
