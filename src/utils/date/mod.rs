// Date utility functions
// Canonical day keys and calendar arithmetic shared by ranges and the event store

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format used for every [`DateKey`]. Zero-padded, so string order equals date order.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical string identity of a calendar day (`YYYY-MM-DD`).
///
/// Two dates fall on the same calendar day iff their keys are equal, and for
/// years 0000 through 9999 comparing keys as strings matches comparing the
/// dates chronologically. No timezone component is stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

impl DateKey {
    /// Build the key for a calendar day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Parse a key, accepting only the exact canonical form.
    ///
    /// `"2024-3-5"` or `"2024-03-05T00:00"` are rejected even though chrono
    /// would read a date out of them.
    pub fn parse(value: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).ok()?;
        let key = Self::from_date(date);
        (key.0 == value).then_some(key)
    }

    /// The calendar day this key names.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`DateKey::from_date`].
pub fn to_key(date: NaiveDate) -> DateKey {
    DateKey::from_date(date)
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl TryFrom<String> for DateKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid date key '{}'", value))
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date.checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the week containing `date` (six days after [`week_start`]).
pub fn week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    week_start(date, first_day_of_week)
        .checked_add_signed(Duration::days(6))
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Shift `date` by whole calendar months.
///
/// The day is clamped to the target month's length (Jan 31 + 1 month is
/// the last day of February). Results outside chrono's range leave the
/// date unchanged.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}
