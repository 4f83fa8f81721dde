//! Birthday Book - a command-line contact directory.
//!
//! Stores names, phone numbers, and birthdays, persists them between runs,
//! and works out when each contact should next be congratulated, moving
//! weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, and birthdays
//! - **models**: Contact records and the address book that owns them
//! - **services**: Birthday scheduling over the address book
//! - **repositories**: Whole-book persistence to a JSON file
//! - **commands**: Command parsing and per-command handlers
//! - **assistant**: The interactive session loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use assistant::run_session;
pub use commands::{Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, PersistenceError};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookStore, JsonFileStore};
pub use services::{upcoming_birthdays, UpcomingBirthday};
