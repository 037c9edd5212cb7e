//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country code prepended to numbers entered without a leading `+`.
pub const COUNTRY_CODE: &str = "38";

/// Length of a normalized number: `+`, country code and ten digits.
pub const NORMALIZED_LEN: usize = 13;

static NON_PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^+0-9]").expect("Failed to compile phone filter regex"));

/// A normalized phone number.
///
/// Every separator character is dropped on construction, and numbers entered
/// without a leading `+` get the regional country code. Two numbers are equal
/// when their normalized forms are equal, so `096-123-46-57` and
/// `+38 (096) 123 46 57` are the same phone.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("096-123-46-57").unwrap();
/// assert_eq!(phone.as_str(), "+380961234657");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from free-form input.
    ///
    /// # Normalization Rules
    ///
    /// - Only `+` and ASCII digits are kept, in their original order
    /// - Without a leading `+`, a leading `38` is dropped, then `+38` is
    ///   prepended
    /// - The result must be exactly 13 characters long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the normalized form has the
    /// wrong length.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let normalized = Self::normalize(raw);

        if normalized.len() != NORMALIZED_LEN {
            return Err(ValidationError::invalid_format("phone", raw));
        }

        Ok(Self(normalized))
    }

    fn normalize(raw: &str) -> String {
        let cleaned = NON_PHONE_CHARS.replace_all(raw, "");
        if cleaned.starts_with('+') {
            return cleaned.into_owned();
        }

        let national = cleaned.strip_prefix(COUNTRY_CODE).unwrap_or(&*cleaned);

        format!("+{}{}", COUNTRY_CODE, national)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
