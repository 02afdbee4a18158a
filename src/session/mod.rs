//! Interactive session loop.
//!
//! The session owns the address book for its whole lifetime. It prompts,
//! reads one line at a time, prints each reply, and saves the book exactly
//! once on the way out, whether the user typed `exit`, input ended, or the
//! process was interrupted.

use crate::book::{AddressBook, Clock};
use crate::commands::{self, Outcome};
use crate::repositories::AddressBookRepository;
use std::future::Future;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `close` or `exit` was entered
    Command,
    /// Input reached end of file
    EndOfInput,
    /// The shutdown signal fired
    Interrupted,
}

/// A running conversation over one address book.
pub struct Session<'a> {
    book: AddressBook,
    repo: &'a dyn AddressBookRepository,
    clock: &'a dyn Clock,
}

impl<'a> Session<'a> {
    pub fn new(
        book: AddressBook,
        repo: &'a dyn AddressBookRepository,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { book, repo, clock }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Run until an exit command, end of input, or `shutdown` resolves.
    ///
    /// The book is saved before returning even if writing to `output` fails.
    /// A failed save is logged, not returned.
    pub async fn run<R, W, F>(
        &mut self,
        input: R,
        output: &mut W,
        shutdown: F,
    ) -> io::Result<ExitReason>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        let result = self.converse(input, output, shutdown).await;
        self.save();

        let reason = result?;
        let farewell = match reason {
            ExitReason::Command => format!("{}\n", FAREWELL),
            ExitReason::EndOfInput | ExitReason::Interrupted => format!("\n{}\n", FAREWELL),
        };
        output.write_all(farewell.as_bytes()).await?;
        output.flush().await?;

        tracing::info!(?reason, "Session ended");
        Ok(reason)
    }

    async fn converse<R, W, F>(
        &mut self,
        input: R,
        output: &mut W,
        shutdown: F,
    ) -> io::Result<ExitReason>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut lines = input.lines();

        output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let line = tokio::select! {
                line = lines.next_line() => line,
                _ = &mut shutdown => return Ok(ExitReason::Interrupted),
            };

            let line = match line {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(ExitReason::EndOfInput),
                Err(e) => {
                    tracing::warn!("Failed to read input, ending session: {}", e);
                    return Ok(ExitReason::EndOfInput);
                }
            };

            match commands::execute(&line, &mut self.book, self.clock) {
                Some(Outcome::Reply(text)) => {
                    output.write_all(format!("{}\n", text).as_bytes()).await?;
                }
                Some(Outcome::Exit) => return Ok(ExitReason::Command),
                None => {}
            }
        }
    }

    fn save(&self) {
        match self.repo.save(&self.book) {
            Ok(()) => tracing::debug!("Address book saved ({} records)", self.book.len()),
            Err(e) => tracing::error!("Failed to save address book: {}", e),
        }
    }
}
