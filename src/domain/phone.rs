//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone number regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits. Surrounding whitespace is
/// trimmed before validation and is not part of the stored value.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" 0501234567 ").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Leading and trailing whitespace is ignored
    /// - The remainder must be exactly 10 characters
    /// - Every character must be an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = phone.as_ref().trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone.as_ref().to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
