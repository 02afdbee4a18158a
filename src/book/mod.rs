//! The address book: every contact record, keyed by name.

pub mod birthdays;

pub use birthdays::{Clock, FixedClock, SystemClock, UpcomingBirthday, UPCOMING_WINDOW_DAYS};

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// All contact records, keyed by each record's raw name.
///
/// Every key equals the raw name of the record stored under it. Iteration
/// order is the map's key order and has no meaning beyond display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// A record already stored under the same name is replaced entirely and
    /// returned. Callers that mean to extend a contact should use
    /// [`AddressBook::find_mut`] instead.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the next seven days, today
    /// included, each paired with its weekday congratulation date.
    ///
    /// See [`birthdays`] for the scheduling rules.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let congratulation_date = birthdays::schedule(birthday, today)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date,
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
