//! Upcoming birthday window.
//!
//! A birthday is projected onto the reference year and kept when it lands
//! inside `[reference, reference + window_days - 1]`. Greetings that would
//! fall on a Saturday or Sunday move to the following Monday.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::ContactName;
use crate::models::ContactRecord;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// The day a greeting is due for a birthday that falls on `date`.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        // Monday = 0, so 7 - index lands on the next Monday.
        weekday @ (Weekday::Sat | Weekday::Sun) => {
            date + Duration::days(7 - i64::from(weekday.num_days_from_monday()))
        }
        _ => date,
    }
}

pub(crate) fn congratulation_for(
    record: &ContactRecord,
    reference: NaiveDate,
    window_days: u32,
) -> Option<UpcomingBirthday> {
    if window_days == 0 {
        return None;
    }

    let this_year = record.birthday()?.occurrence_in(reference.year())?;
    let last_day = reference
        .checked_add_signed(Duration::days(i64::from(window_days) - 1))
        .unwrap_or(NaiveDate::MAX);

    (reference..=last_day)
        .contains(&this_year)
        .then(|| UpcomingBirthday {
            name: record.name().clone(),
            congratulation_date: congratulation_date(this_year),
        })
}
