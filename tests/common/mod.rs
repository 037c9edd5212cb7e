//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDate};
use contact_assistant::commands::handlers;
use contact_assistant::AddressBook;

/// A book holding "Dmytro" with the phone 096-123-46-57.
pub fn book_with_dmytro() -> AddressBook {
    let mut book = AddressBook::new();
    handlers::add_contact(&["Dmytro", "096-123-46-57"], &mut book).unwrap();
    book
}

/// A `DD.MM.1988` birthday that falls `days` days after `reference`.
pub fn birthday_in(reference: NaiveDate, days: i64) -> String {
    let date = reference + Duration::days(days);
    format!("{}.1988", date.format("%d.%m"))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday 10 June 2024, chosen so a week-long window stays inside one year.
pub fn mid_year_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}
