//! Line command dispatcher.
//!
//! A line is split on whitespace; the first word (case-insensitive) picks a
//! [`Command`] and the rest are its arguments. Every error a command returns
//! is rendered to its user-facing text here, so nothing below the session
//! loop ever ends the program.

pub mod handlers;

use crate::book::{AddressBook, Clock};
use crate::error::{CommandError, CommandResult};
use std::panic::{self, AssertUnwindSafe};

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Exit,
}

impl Command {
    /// Look up a command word. Matching ignores case.
    pub fn from_word(word: &str) -> Option<Self> {
        let command = match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "close" | "exit" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Run the command against the book.
    ///
    /// `Exit` has no handler; the session owns shutdown.
    pub fn run(
        self,
        args: &[&str],
        book: &mut AddressBook,
        clock: &dyn Clock,
    ) -> CommandResult<String> {
        match self {
            Command::Hello => handlers::hello(args, book),
            Command::Add => handlers::add_contact(args, book),
            Command::Change => handlers::change_contact(args, book),
            Command::Phone => handlers::show_phone(args, book),
            Command::All => handlers::show_all(args, book),
            Command::AddBirthday => handlers::add_birthday(args, book),
            Command::ShowBirthday => handlers::show_birthday(args, book),
            Command::Birthdays => handlers::birthdays(args, book, clock.today()),
            Command::RemovePhone => handlers::remove_phone(args, book),
            Command::Delete => handlers::delete_contact(args, book),
            Command::Exit => Ok(String::new()),
        }
    }
}

/// A parsed input line: the command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub command: &'a str,
    pub args: Vec<&'a str>,
}

/// Split a line into command word and arguments. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some(ParsedInput {
        command,
        args: words.collect(),
    })
}

/// What the session should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep going
    Reply(String),
    /// Save and end the session
    Exit,
}

/// Handle one input line.
///
/// Returns `None` for a blank line. Errors, including a panicking handler,
/// come back as [`Outcome::Reply`] with the error's display text.
pub fn execute(line: &str, book: &mut AddressBook, clock: &dyn Clock) -> Option<Outcome> {
    let input = parse_input(line)?;

    let Some(command) = Command::from_word(input.command) else {
        tracing::debug!("Unknown command: {}", input.command);
        return Some(Outcome::Reply(CommandError::UnknownCommand.to_string()));
    };

    if command == Command::Exit {
        return Some(Outcome::Exit);
    }

    tracing::debug!(?command, args = input.args.len(), "Running command");
    let reply = render(run_guarded(|| command.run(&input.args, book, clock)));
    Some(Outcome::Reply(reply))
}

/// Run a handler, turning a panic into [`CommandError::Internal`].
fn run_guarded<F>(handler: F) -> CommandResult<String>
where
    F: FnOnce() -> CommandResult<String>,
{
    panic::catch_unwind(AssertUnwindSafe(handler))
        .unwrap_or_else(|payload| Err(CommandError::Internal(panic_message(&*payload))))
}

fn render(result: CommandResult<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Command failed: {}", e);
            e.to_string()
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected failure".to_string()
    }
}
