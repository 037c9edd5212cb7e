//! Contact store.
//!
//! The address book owns every contact record, enforces unique names and
//! answers the upcoming-birthday query.

mod address_book;
pub mod upcoming;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use upcoming::{congratulation_date, UpcomingBirthday};
