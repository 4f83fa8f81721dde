//! Birthday scheduling.
//!
//! Works out, for every contact with a birthday, the next date on which to
//! congratulate them. Greetings never land on a weekend: a Saturday or Sunday
//! birthday is greeted on the following Monday.

use crate::models::AddressBook;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Output format for congratulation dates (`YYYY.MM.DD`).
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact and the day they should be congratulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name (the directory key)
    pub name: String,

    /// Weekend-adjusted greeting date
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date rendered as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(CONGRATULATION_FORMAT)
        )
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_FORMAT))
}

/// Compute the greeting date for every record that has a birthday.
///
/// For each birthday:
/// 1. Project it onto `today`'s year; if that is already past, use next
///    year's occurrence. A birthday that falls on `today` counts as upcoming.
/// 2. If the projected day is a Saturday or Sunday, move it to the next Monday.
///
/// Results follow the book's iteration order. Records without a birthday are
/// skipped.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
    let upcoming: Vec<UpcomingBirthday> = book
        .iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;

            let mut next = birthday.in_year(today.year());
            if next < today {
                next = birthday.in_year(today.year() + 1);
            }

            Some(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation_date(today, (next - today).num_days()),
            })
        })
        .collect();

    debug!(
        "Computed {} upcoming birthdays from {} records",
        upcoming.len(),
        book.len()
    );
    upcoming
}

/// The greeting date `days_until` days after `today`, rolled off weekends.
fn congratulation_date(today: NaiveDate, days_until: i64) -> NaiveDate {
    let mut days = days_until;
    let weekday = i64::from((today + Duration::days(days)).weekday().num_days_from_monday());
    if weekday >= 5 {
        days += 7 - weekday;
    }
    today + Duration::days(days)
}
