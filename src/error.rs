//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live with the value objects in [`crate::domain`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record holds no phone equal to the one given
    #[error("Phone {phone} not found for contact {name}.")]
    PhoneNotFound { phone: String, name: String },
}

/// Errors raised by address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors surfaced by a single command.
///
/// The display text of each variant is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed phone number, date, or name
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown contact name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The contact exists but does not hold the phone
    #[error("Phone {phone} not found for contact {name}.")]
    PhoneNotFound { phone: String, name: String },

    /// Too few arguments; carries the usage guidance for the command
    #[error("{0}")]
    InvalidArguments(&'static str),

    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand,

    /// Anything else
    #[error("An error occurred: {0}")]
    Internal(String),
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => CommandError::Validation(e),
            RecordError::PhoneNotFound { phone, name } => {
                CommandError::PhoneNotFound { phone, name }
            }
        }
    }
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::ContactNotFound(_) => CommandError::ContactNotFound,
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the snapshot
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The data file and its backup could not be parsed
    #[error("Data file {path} is corrupted: {reason}")]
    Corrupted { path: String, reason: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
