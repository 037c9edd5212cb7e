//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used for both parsing and display.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1900;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex")
});

/// A validated date of birth.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("01.04.1990").unwrap();
/// assert_eq!(birthday.to_string(), "01.04.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` birthday, checked against today's local date.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidFormat` if the input is not a real
    ///   `DD.MM.YYYY` date
    /// - `ValidationError::FutureDate` if the date is after today
    /// - `ValidationError::TooOld` if the year is before 1900
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_as_of(raw, Local::now().date_naive())
    }

    /// Parse a `DD.MM.YYYY` birthday, treating `today` as the current date.
    pub fn parse_as_of(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(raw) {
            return Err(ValidationError::invalid_format("birthday", raw));
        }

        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::invalid_format("birthday", raw))?;

        if date > today {
            return Err(ValidationError::FutureDate(date));
        }
        if date.year() < MIN_YEAR {
            return Err(ValidationError::TooOld(date));
        }

        Ok(Self(date))
    }

    /// The date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 falls on February 28 in non-leap years. Returns `None`
    /// only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::parse("01.04.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        for raw in ["31.02.2000", "1.4.1990", "1990-04-01", "01.13.1990", "01.04.90", ""] {
            assert!(
                matches!(
                    Birthday::parse_as_of(raw, today()),
                    Err(ValidationError::InvalidFormat { field: "birthday", .. })
                ),
                "expected InvalidFormat for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_birthday_rejects_surrounding_whitespace() {
        for raw in [" 01.04.1990", "01.04.1990 ", "01.04.1990\n"] {
            assert!(
                matches!(
                    Birthday::parse_as_of(raw, today()),
                    Err(ValidationError::InvalidFormat { field: "birthday", .. })
                ),
                "expected InvalidFormat for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_birthday_rejects_future() {
        let result = Birthday::parse_as_of("16.06.2024", today());
        assert!(matches!(result, Err(ValidationError::FutureDate(_))));

        let tomorrow = Local::now().date_naive() + chrono::Duration::days(1);
        let raw = tomorrow.format(DATE_FORMAT).to_string();
        assert!(matches!(
            Birthday::parse(&raw),
            Err(ValidationError::FutureDate(_))
        ));
    }

    #[test]
    fn test_birthday_today_is_accepted() {
        assert!(Birthday::parse_as_of("15.06.2024", today()).is_ok());
    }

    #[test]
    fn test_birthday_rejects_too_old() {
        assert!(matches!(
            Birthday::parse("01.01.1899"),
            Err(ValidationError::TooOld(_))
        ));
        assert!(Birthday::parse("01.01.1900").is_ok());
    }

    #[test]
    fn test_occurrence_in_leap_day() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("01.04.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.04.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
