//! Contact record: a name with its phone numbers and optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep their insertion order and never
/// contain two equal numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name.
    pub fn named(name: &str) -> BookResult<Self> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if the number does not normalize
    /// - `BookError::DuplicatePhone` if an equal number is already stored
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(phone.into_inner()));
        }

        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number. Removing a number that is not stored is a no-op.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if let Some(index) = self.position_of(&phone) {
            debug!(contact = %self.name, phone = %phone, "Removing phone");
            self.phones.remove(index);
        }
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if either number does not normalize
    /// - `BookError::PhoneNotFound` if `old` is not stored
    /// - `BookError::DuplicatePhone` if `new` is already stored
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;

        let index = self
            .position_of(&old)
            .ok_or_else(|| BookError::PhoneNotFound(old.as_str().to_string()))?;

        if self.phones.contains(&new) {
            return Err(BookError::DuplicatePhone(new.into_inner()));
        }

        debug!(contact = %self.name, old = %old, new = %new, "Editing phone");
        self.phones[index] = new;
        Ok(())
    }

    /// Look up the stored phone equal to `raw` after normalization.
    pub fn find_phone(&self, raw: &str) -> BookResult<Option<&PhoneNumber>> {
        let phone = PhoneNumber::new(raw)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = Birthday::parse(raw)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable one-line summary.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, phone: &PhoneNumber) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
