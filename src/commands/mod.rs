//! Command layer.
//!
//! Turns a parsed input line into an address book operation and a line of
//! output. Every handler error stops at [`with_usage`], which replaces it
//! with the command's fixed usage hint.

pub mod handlers;
pub mod parser;

use crate::error::CommandResult;
use std::str::FromStr;
use tracing::debug;

pub use parser::{parse_input, ParsedInput};

/// Usage line printed for unrecognized input.
pub const GENERAL_USAGE: &str = "Invalid command. Usage: hello | all | add [name] [phone] | \
     change [name] [phone] [new phone] | contact [name] | delete [name] | \
     add-birthday [name] [date] | show-birthday [name] | birthdays | exit | close";

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Delete,
    Contact,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `exit` or `close`
    Exit,
}

impl Command {
    /// The command word as typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Delete => "delete",
            Command::Contact => "contact",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }

    /// The message shown in place of any error raised by this command.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Add => "Invalid command. Usage: add [name] [phone]",
            Command::Change => "Invalid command. Usage: change [name] [phone] [new phone]",
            Command::Delete => "Invalid command. Usage: delete [name]",
            Command::Contact => "Invalid command. Usage: contact [name]",
            Command::AddBirthday => "Invalid command. Usage: add-birthday [name] [date]",
            Command::ShowBirthday => "Invalid command. Usage: show-birthday [name]",
            Command::Birthdays => "Invalid command. Usage: birthdays",
            Command::Hello | Command::All | Command::Exit => GENERAL_USAGE,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "delete" => Ok(Command::Delete),
            "contact" => Ok(Command::Contact),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "exit" | "close" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// What the REPL should do with a command's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single line of output.
    Message(String),
    /// Several lines, printed in order.
    Lines(Vec<String>),
    /// Print a farewell and stop reading input.
    Exit(String),
}

impl From<String> for Reply {
    fn from(message: String) -> Self {
        Reply::Message(message)
    }
}

impl From<&str> for Reply {
    fn from(message: &str) -> Self {
        Reply::Message(message.to_string())
    }
}

impl From<Vec<String>> for Reply {
    fn from(lines: Vec<String>) -> Self {
        Reply::Lines(lines)
    }
}

/// Recover from a handler error by showing `usage` instead.
///
/// The underlying error is logged at debug level and never shown to the user.
pub fn with_usage<T: Into<Reply>>(usage: &str, result: CommandResult<T>) -> Reply {
    match result {
        Ok(value) => value.into(),
        Err(err) => {
            debug!(error = %err, "Command failed");
            Reply::Message(usage.to_string())
        }
    }
}
