//! Record model representing one person in the contact book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: name, phone numbers in insertion order, and an optional birthday.
///
/// The name is fixed at construction. Duplicate phone numbers are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `new` is not a valid phone; the list is
    ///   left untouched.
    /// - `RecordError::PhoneNotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| RecordError::PhoneNotFound {
                phone: old.to_string(),
                name: self.name.as_str().to_string(),
            })?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// First phone with exactly this value.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Remove the first phone with exactly this value.
    ///
    /// Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Set the birthday from an already validated value.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Phones joined with `"; "`, as shown to the user.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name.title_case(),
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
