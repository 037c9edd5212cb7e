//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already on the record
    #[error("Phone number already exists: {0}")]
    DuplicatePhone(String),

    /// The phone number is not on the record
    #[error("No such phone number: {0}")]
    PhoneNotFound(String),

    /// A contact with this name is already in the book
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    /// No contact with this name is in the book
    #[error("No such contact: {0}")]
    ContactNotFound(String),
}

/// Errors raised while executing a single command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer positional arguments than the command needs
    #[error("{command} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
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

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
