//! Contact Assistant - an interactive command-line contact book.
//!
//! Stores contacts with normalized phone numbers and optional birthdays,
//! and reports who to congratulate in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and its phone/birthday operations
//! - **book**: The address book and the upcoming-birthday window
//! - **commands**: Command parsing, handlers and the usage-hint error boundary
//! - **assistant**: Dispatch from an input line to a reply
//! - **repl**: The read-eval-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use assistant::Assistant;
pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::ContactRecord;
