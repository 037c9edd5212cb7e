//! Command dispatch over a single address book.

use crate::book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::commands::{handlers, parse_input, with_usage, Command, Reply, GENERAL_USAGE};
use crate::config::Config;
use chrono::{Local, NaiveDate};
use tracing::debug;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The assistant bot: owns the address book and routes commands to it.
pub struct Assistant {
    book: AddressBook,
    birthday_window_days: u32,
    today: fn() -> NaiveDate,
}

impl Assistant {
    /// Create an assistant with an empty book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config.birthday_window_days)
    }

    /// Create an assistant over an existing book.
    pub fn with_book(book: AddressBook, birthday_window_days: u32) -> Self {
        Self {
            book,
            birthday_window_days,
            today: local_today,
        }
    }

    /// Replace the clock used as the reference date for `birthdays`.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and run one input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let parsed = parse_input(line)?;
        let reply = match parsed.command.parse::<Command>() {
            Ok(command) => self.execute(command, &parsed.args),
            Err(unknown) => {
                debug!(command = %unknown, "Unknown command");
                Reply::Message(GENERAL_USAGE.to_string())
            }
        };
        Some(reply)
    }

    /// Run a command, converting any failure into the command's usage hint.
    pub fn execute(&mut self, command: Command, args: &[&str]) -> Reply {
        debug!(command = command.name(), args = args.len(), "Executing command");

        let usage = command.usage();
        let book = &mut self.book;
        match command {
            Command::Hello => Reply::from("How can I help you?"),
            Command::Exit => Reply::Exit("Good bye!".to_string()),
            Command::All => handlers::get_all_contacts(book),
            Command::Add => with_usage(usage, handlers::add_contact(args, book)),
            Command::Change => with_usage(usage, handlers::change_contact(args, book)),
            Command::Delete => with_usage(usage, handlers::delete_contact(args, book)),
            Command::Contact => with_usage(usage, handlers::get_contact(args, book)),
            Command::AddBirthday => with_usage(usage, handlers::add_birthday(args, book)),
            Command::ShowBirthday => with_usage(usage, handlers::show_birthday(args, book)),
            Command::Birthdays => with_usage(
                usage,
                handlers::birthdays(book, (self.today)(), self.birthday_window_days),
            ),
        }
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::with_book(AddressBook::new(), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}
