//! One handler per command.
//!
//! Every handler takes the whitespace-split arguments and the address book
//! and returns the reply text. Argument counts are checked before any
//! positional argument is read.

use crate::book::AddressBook;
use crate::domain::PhoneNumber;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;

pub const ADD_USAGE: &str = "Invalid command format. Please provide all required arguments.";
pub const CHANGE_USAGE: &str = "Please provide name, old phone, and new phone.";
pub const NAME_USAGE: &str = "Please provide a name.";
pub const ADD_BIRTHDAY_USAGE: &str = "Please provide name and birthday (DD.MM.YYYY).";
pub const REMOVE_PHONE_USAGE: &str = "Please provide name and phone.";

pub fn hello(_args: &[&str], _book: &mut AddressBook) -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// Add a phone to a contact, creating the contact if it does not exist yet.
///
/// The phone is validated first, so a bad number never leaves an empty new
/// contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InvalidArguments(ADD_USAGE));
    };
    let phone = PhoneNumber::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(*name)?;
    record.push_phone(phone);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::InvalidArguments(CHANGE_USAGE));
    };
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;

    if record.find_phone(old_phone).is_none() {
        return Err(CommandError::PhoneNotFound {
            phone: old_phone.to_string(),
            name: name.to_string(),
        });
    }

    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

pub fn show_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidArguments(NAME_USAGE));
    };
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    if record.phones().is_empty() {
        return Ok(format!("{} has no phone numbers.", name));
    }
    Ok(format!("{}: {}", name, record.phones_display()))
}

pub fn show_all(_args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    let lines: Vec<String> = book.records().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}

pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::InvalidArguments(ADD_BIRTHDAY_USAGE));
    };
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;

    record.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidArguments(NAME_USAGE));
    };
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("{} has no birthday set.", name)),
    }
}

pub fn birthdays(
    _args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays(today);

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next 7 days.".to_string());
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(|entry| entry.to_string()));
    Ok(lines.join("\n"))
}

pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InvalidArguments(REMOVE_PHONE_USAGE));
    };
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;

    if !record.remove_phone(phone) {
        return Err(CommandError::PhoneNotFound {
            phone: phone.to_string(),
            name: name.to_string(),
        });
    }
    Ok(format!("Phone {} removed for {}.", phone, name))
}

pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidArguments(NAME_USAGE));
    };

    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}
