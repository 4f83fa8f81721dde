//! Error types for the birthday book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// User-facing reply for validation and arity failures.
pub const MSG_GIVE_ME_INPUT: &str = "Give me name, phone, or birthday please.";

/// User-facing reply when the named contact does not exist.
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";

/// User-facing reply for an invocation that cannot be carried out as shaped.
pub const MSG_INVALID_FORMAT: &str = "Invalid command format.";

/// Errors raised by directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur while executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed phone or date input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation on an absent contact
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Wrong number of arguments for the command
    #[error("{command} expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// The command cannot be applied to the contact as it stands
    #[error("Invalid command format: {0}")]
    Malformed(String),
}

impl CommandError {
    /// The fixed string shown to the user for this error kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Arity { .. } => MSG_GIVE_ME_INPUT,
            Self::NotFound(_) => MSG_CONTACT_NOT_FOUND,
            Self::Malformed(_) => MSG_INVALID_FORMAT,
        }
    }
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(name) => Self::NotFound(name),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the storage file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
