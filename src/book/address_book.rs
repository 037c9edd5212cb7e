//! In-memory address book keyed by contact name.

use super::upcoming::{self, UpcomingBirthday};
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use tracing::debug;

/// Default length of the upcoming-birthday window, today included.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// The collection of contact records.
///
/// Names are unique. Records are kept in insertion order, which is the order
/// used by [`AddressBook::list_all`] and [`AddressBook::upcoming_birthdays`].
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` if a record with the same name is
    /// already present. The book is left unchanged.
    pub fn add_record(&mut self, record: ContactRecord) -> BookResult<()> {
        if self.position_of(record.name().as_str()).is_some() {
            return Err(BookError::DuplicateContact(record.name().to_string()));
        }

        debug!(contact = %record.name(), "Adding contact");
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by exact name. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| *r.name() == *name)
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| *r.name() == *name)
    }

    /// Look up a record that must exist.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record has this name.
    pub fn find_required(&self, name: &str) -> BookResult<&ContactRecord> {
        self.find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Mutable variant of [`AddressBook::find_required`].
    pub fn find_required_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove a record by name, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let index = self.position_of(name)?;
        debug!(contact = name, "Deleting contact");
        Some(self.records.remove(index))
    }

    /// Rendered records in insertion order.
    ///
    /// The iterator borrows the book, so it always reflects the current
    /// contents and can be requested again after any change.
    pub fn list_all(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(ContactRecord::render)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `window_days` days starting at
    /// `reference` (inclusive), in book order.
    ///
    /// See [`upcoming`](super::upcoming) for the projection and weekend rules.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| upcoming::congratulation_for(record, reference, window_days))
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| *r.name() == *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> ContactRecord {
        let mut record = ContactRecord::named(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(record("Dmytro", "096-123-46-57")).unwrap();
        book.add_record(record("Anna", "050-111-22-33")).unwrap();
        book
    }

    #[test]
    fn test_add_record() {
        let book = sample_book();
        assert_eq!(book.len(), 2);
        assert!(book.find("Anna").is_some());
    }

    #[test]
    fn test_add_duplicate_record_fails() {
        let mut book = sample_book();
        let result = book.add_record(record("Dmytro", "1234567890"));
        assert_eq!(
            result,
            Err(BookError::DuplicateContact("Dmytro".to_string()))
        );
        assert_eq!(book.len(), 2);
        assert_eq!(
            book.find("Dmytro").unwrap().phones()[0].as_str(),
            "+380961234657"
        );
    }

    #[test]
    fn test_find_absent_is_none() {
        let book = sample_book();
        assert!(book.find("Nobody").is_none());
        assert!(book.find("dmytro").is_none());
    }

    #[test]
    fn test_find_required_absent_fails() {
        let book = sample_book();
        assert_eq!(
            book.find_required("Nobody").unwrap_err(),
            BookError::ContactNotFound("Nobody".to_string())
        );
    }

    #[test]
    fn test_find_required_mut_allows_edits() {
        let mut book = sample_book();
        book.find_required_mut("Anna")
            .unwrap()
            .add_phone("0671234567")
            .unwrap();
        assert_eq!(book.find("Anna").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut book = sample_book();
        let removed = book.delete("Dmytro");
        assert_eq!(removed.unwrap().name().as_str(), "Dmytro");
        assert!(book.find("Dmytro").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut book = sample_book();
        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let book = sample_book();
        let listed: Vec<String> = book.list_all().collect();
        assert_eq!(
            listed,
            vec![
                "Contact name: Dmytro, phones: +380961234657".to_string(),
                "Contact name: Anna, phones: +380501112233".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_all_is_repeatable_and_live() {
        let mut book = sample_book();
        let first: Vec<String> = book.list_all().collect();
        let second: Vec<String> = book.list_all().collect();
        assert_eq!(first, second);

        book.delete("Anna");
        assert_eq!(book.list_all().count(), 1);
    }
}
