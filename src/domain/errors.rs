//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided value does not match the expected format.
    InvalidFormat {
        /// What was being parsed ("phone", "birthday").
        field: &'static str,
        /// The raw input.
        value: String,
    },

    /// The birthday lies after the current date.
    FutureDate(NaiveDate),

    /// The birthday year is earlier than the supported minimum.
    TooOld(NaiveDate),
}

impl ValidationError {
    pub(crate) fn invalid_format(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidFormat { field, value } => {
                write!(f, "Invalid {} format: {}", field, value)
            }
            Self::FutureDate(date) => write!(
                f,
                "Birthday can't be in the future: {}",
                date.format("%d.%m.%Y")
            ),
            Self::TooOld(date) => write!(
                f,
                "Birthday can't be earlier than 1900: {}",
                date.format("%d.%m.%Y")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
