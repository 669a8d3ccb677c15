//! Calendar helpers for comment and album dates.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::{Date, OffsetDateTime};

/// Today's calendar date in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Long human form, e.g. `February 10, 2024`.
pub fn format_long(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}
