//! Upcoming-birthday scheduling.
//!
//! A birthday is "upcoming" when its next occurrence (today counts) is less
//! than [`UPCOMING_WINDOW_DAYS`] days away. Greetings are never scheduled on a
//! weekend: a Saturday or Sunday occurrence is congratulated the following
//! Monday, even when that Monday lies past the window.
//!
//! Feb 29 birthdays occur on Feb 28 in years that are not leap years.

use crate::domain::{Birthday, DATE_FORMAT};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Length of the look-ahead window, today included.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Source of the reference date for scheduling.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date, time of day discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Raw name as stored in the book
    pub name: String,

    /// Occurrence date moved off the weekend
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn congratulation_date_str(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date_str())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// The birthday's month/day in `year`.
///
/// Returns `None` only when `year` is outside chrono's range.
pub fn occurrence_in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    let date = birthday.date();
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        if date.month() == 2 && date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The first occurrence on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence
        .checked_add_days(Days::new(shift))
        .unwrap_or(occurrence)
}

/// Schedule a single birthday relative to `today`.
///
/// Returns the congratulation date when the next occurrence falls inside the
/// window, `None` otherwise.
pub fn schedule(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let days_until = occurrence.signed_duration_since(today).num_days();

    if (0..UPCOMING_WINDOW_DAYS).contains(&days_until) {
        Some(congratulation_date(occurrence))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(y: i32, m: u32, d: u32) -> Birthday {
        Birthday::from_date(date(y, m, d))
    }

    #[test]
    fn test_next_occurrence_same_year() {
        let today = date(2024, 6, 10);
        assert_eq!(
            next_occurrence(&birthday(1990, 6, 12), today),
            Some(date(2024, 6, 12))
        );
        assert_eq!(
            next_occurrence(&birthday(1990, 6, 10), today),
            Some(date(2024, 6, 10))
        );
    }

    #[test]
    fn test_next_occurrence_rolls_over() {
        let today = date(2024, 12, 30);
        assert_eq!(
            next_occurrence(&birthday(1985, 1, 2), today),
            Some(date(2025, 1, 2))
        );
    }

    #[test]
    fn test_leap_day_falls_back_to_feb_28() {
        let leap = birthday(2000, 2, 29);
        assert_eq!(occurrence_in_year(&leap, 2023), Some(date(2023, 2, 28)));
        assert_eq!(occurrence_in_year(&leap, 2024), Some(date(2024, 2, 29)));

        // Passed this year, next year is a leap year
        assert_eq!(
            next_occurrence(&leap, date(2023, 3, 1)),
            Some(date(2024, 2, 29))
        );
        // Passed in a leap year, next year is not
        assert_eq!(
            next_occurrence(&leap, date(2024, 3, 1)),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_congratulation_date_weekend_shift() {
        // 2024-06-15 is a Saturday, 2024-06-16 a Sunday
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 14)), date(2024, 6, 14));
        assert_eq!(congratulation_date(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn test_schedule_window_bounds() {
        let today = date(2024, 6, 10);
        assert_eq!(schedule(&birthday(1990, 6, 10), today), Some(date(2024, 6, 10)));
        assert_eq!(schedule(&birthday(1990, 6, 16), today), Some(date(2024, 6, 17)));
        assert_eq!(schedule(&birthday(1990, 6, 17), today), None);
        assert_eq!(schedule(&birthday(1990, 6, 9), today), None);
    }

    #[test]
    fn test_upcoming_birthday_display() {
        let entry = UpcomingBirthday {
            name: "john".to_string(),
            congratulation_date: date(2024, 6, 17),
        };
        assert_eq!(entry.congratulation_date_str(), "17.06.2024");
        assert_eq!(entry.to_string(), "john: 17.06.2024");

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"john","congratulation_date":"17.06.2024"}"#);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 1, 1));
        assert_eq!(clock.today(), date(2024, 1, 1));
    }
}
