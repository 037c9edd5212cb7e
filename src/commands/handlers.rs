//! Command handlers.
//!
//! Each handler validates its arguments, calls into the address book and
//! returns the text to show. Errors are left for [`super::with_usage`].

use super::{Command, Reply};
use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;

/// Take the first `N` arguments, ignoring any extras.
fn positional<'a, const N: usize>(
    command: Command,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::ArityMismatch {
            command: command.name(),
            expected: N,
            actual: args.len(),
        })
}

/// `add [name] [phone]`: create the contact, or add a phone to an existing one.
///
/// A new contact is only inserted once its first phone has validated.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = positional(Command::Add, args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = ContactRecord::named(name)?;
    record.add_phone(phone)?;
    book.add_record(record)?;
    Ok("Contact added.".to_string())
}

/// `change [name] [phone] [new phone]`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, new_phone] = positional(Command::Change, args)?;
    book.find_required_mut(name)?.edit_phone(phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `delete [name]`: succeeds whether or not the contact exists.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = positional(Command::Delete, args)?;
    book.delete(name);
    Ok("Contact deleted.".to_string())
}

/// `contact [name]`
pub fn get_contact(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = positional(Command::Contact, args)?;
    Ok(book.find_required(name)?.render())
}

/// `all`
pub fn get_all_contacts(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Reply::Message("No contacts saved.".to_string());
    }
    Reply::Lines(book.list_all().collect())
}

/// `add-birthday [name] [date]`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = positional(Command::AddBirthday, args)?;
    book.find_required_mut(name)?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday [name]`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = positional(Command::ShowBirthday, args)?;
    let shown = book
        .find_required(name)?
        .birthday()
        .map(ToString::to_string)
        .unwrap_or_else(|| "Birthday not set.".to_string());
    Ok(shown)
}

/// `birthdays`: one `name: DD.MM.YYYY` line per contact to congratulate.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> CommandResult<Reply> {
    let lines: Vec<String> = book
        .upcoming_birthdays(today, window_days)
        .iter()
        .map(ToString::to_string)
        .collect();

    if lines.is_empty() {
        return Ok(Reply::Message("No upcoming birthdays.".to_string()));
    }
    Ok(Reply::Lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    fn book_with_dmytro() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&["Dmytro", "096-123-46-57"], &mut book).unwrap();
        book
    }

    #[test]
    fn test_positional_ignores_extra_args() {
        let [a, b] = positional::<2>(Command::Add, &["x", "y", "z"]).unwrap();
        assert_eq!((a, b), ("x", "y"));
    }

    #[test]
    fn test_positional_reports_arity() {
        let err = positional::<3>(Command::Change, &["x"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::ArityMismatch {
                command: "change",
                expected: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_add_contact_new() {
        let mut book = book_with_dmytro();
        let message = add_contact(&["John", "123-456-78-90"], &mut book).unwrap();
        assert_eq!(message, "Contact added.");
        assert!(book.find("John").is_some());
    }

    #[test]
    fn test_add_contact_existing_appends_phone() {
        let mut book = book_with_dmytro();
        let message = add_contact(&["Dmytro", "123-456-78-90"], &mut book).unwrap();
        assert_eq!(message, "Contact updated.");
        assert_eq!(
            book.find("Dmytro").unwrap().phones()[1].as_str(),
            "+381234567890"
        );
    }

    #[test]
    fn test_add_contact_invalid_phone_leaves_book_unchanged() {
        let mut book = book_with_dmytro();
        assert!(add_contact(&["John", "123"], &mut book).is_err());
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = book_with_dmytro();
        let err = change_contact(&["John", "0961234657", "1234567890"], &mut book).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_show_birthday_not_set() {
        let book = book_with_dmytro();
        assert_eq!(
            show_birthday(&["Dmytro"], &book).unwrap(),
            "Birthday not set."
        );
    }

    #[test]
    fn test_birthdays_empty() {
        let book = book_with_dmytro();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(
            birthdays(&book, today, 7).unwrap(),
            Reply::Message("No upcoming birthdays.".to_string())
        );
    }

    #[test]
    fn test_all_contacts_empty() {
        assert_eq!(
            get_all_contacts(&AddressBook::new()),
            Reply::Message("No contacts saved.".to_string())
        );
    }
}
