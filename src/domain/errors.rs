//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The display text of each variant is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD.MM.YYYY` date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Incorrect phone number format."),
            Self::InvalidDate(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
