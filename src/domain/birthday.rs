//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for the `DD.MM.YYYY` layout used for input,
/// display, and storage.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's `%Y` also takes short or signed years, so the layout is checked first
static DATE_LAYOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile date layout regex")
});

/// A contact's birthday as a plain calendar date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for empty input, a different
    /// layout (including a year that is not exactly four digits), or a date
    /// that does not exist on the calendar.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !DATE_LAYOUT_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Wrap an already parsed date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

// Serde support - stored in the same layout users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
