//! Command surface of the assistant.
//!
//! A line of input is parsed into a [`Command`] plus its arguments, handed to
//! the matching handler together with the address book, and answered with a
//! [`Reply`]. Handlers never print; the session loop does.

pub mod handlers;

use crate::models::AddressBook;
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::{debug, warn};

/// Reply for input that names no known command.
pub const MSG_INVALID_COMMAND: &str = "Invalid command.";

/// Farewell printed by `close` / `exit`.
pub const MSG_GOOD_BYE: &str = "Good bye!";

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
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// What the session loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line
    Continue(String),
    /// Print the message, save, and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(msg) | Reply::Exit(msg) => msg,
        }
    }
}

/// Split a raw input line into a command and its arguments.
///
/// The whole line is lowercased first, so names and keywords are
/// case-insensitive. Returns `None` for blank input or an unknown command.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let line = line.to_lowercase();
    let mut parts = line.split_whitespace();
    let command = parts.next()?.parse::<Command>().ok()?;
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Run one command against `book`.
///
/// Handler errors are turned into their fixed user-facing message here; they
/// never stop the session.
pub fn execute(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
) -> Reply {
    debug!("Executing {:?} with {} argument(s)", command, args.len());

    let result = match command {
        Command::Exit => return Reply::Exit(MSG_GOOD_BYE.to_string()),
        Command::Hello => Ok(handlers::hello()),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => Ok(handlers::show_all(book)),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => Ok(handlers::birthdays(book, today)),
    };

    match result {
        Ok(message) => Reply::Continue(message),
        Err(e) => {
            warn!("{:?} failed: {}", command, e);
            Reply::Continue(e.user_message().to_string())
        }
    }
}

/// Parse and run a raw input line.
pub fn handle_line(line: &str, book: &mut AddressBook, today: NaiveDate) -> Reply {
    match parse_input(line) {
        Some((command, args)) => execute(command, &args, book, today),
        None => {
            debug!("Unrecognized input: {:?}", line);
            Reply::Continue(MSG_INVALID_COMMAND.to_string())
        }
    }
}
