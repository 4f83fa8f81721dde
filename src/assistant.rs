//! Interactive session loop.
//!
//! Loads the address book once, answers one command per input line, and
//! saves the book once when the user exits or input ends.

use crate::commands::{self, Reply};
use crate::models::AddressBook;
use crate::repositories::AddressBookStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::info;

pub const MSG_WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run an interactive session against `store`.
///
/// Each line read from `input` is answered on `output`. `today` is asked
/// for the current date whenever a command needs it. The book is saved when
/// the user types `close`/`exit` or `input` is exhausted, and the final
/// state is returned.
///
/// # Errors
/// Fails if the book cannot be loaded or saved, or on an I/O error on the
/// terminal streams.
pub fn run_session<S, R, W, F>(store: &S, input: R, mut output: W, today: F) -> Result<AddressBook>
where
    S: AddressBookStore + ?Sized,
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    let mut book = store.load().context("Failed to load address book")?;
    info!("Session started with {} contacts", book.len());

    writeln!(output, "{}", MSG_WELCOME)?;
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        match commands::handle_line(&line, &mut book, today()) {
            Reply::Continue(message) => writeln!(output, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                break;
            }
        }
    }

    store.save(&book).context("Failed to save address book")?;
    info!("Session ended with {} contacts", book.len());
    Ok(book)
}
