//! Contact Book - a command-line assistant for a personal contact book.
//!
//! Contacts carry phone numbers and an optional birthday. The book is kept in
//! memory during a session, driven by line commands, and saved to a JSON file
//! between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone number, birthday)
//! - **models**: The contact record
//! - **book**: The address book and upcoming-birthday scheduling
//! - **repositories**: Loading and saving the book
//! - **commands**: Command parsing, handlers, and error rendering
//! - **session**: The interactive read-reply loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use book::{AddressBook, Clock, FixedClock, SystemClock, UpcomingBirthday};
pub use commands::{execute, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, RecordError, StorageError};
pub use models::Record;
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use session::{ExitReason, Session};
