//! Calendar due date attached to a task list.

use super::TaskListError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Returns `true` when `value` is a real calendar day written as
/// `YYYY-MM-DD`.
///
/// The year must be exactly four digits and the month and day exactly two.
/// Day counts follow the month length, with February 29 accepted only in leap
/// years.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let mut fields = value.split('-');
    let year = numeric_field(fields.next()?, 4)?;
    let month = numeric_field(fields.next()?, 2)?;
    let day = numeric_field(fields.next()?, 2)?;
    if fields.next().is_some() {
        return None;
    }
    let year_value = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year_value, month, day)
}

fn numeric_field(field: &str, width: usize) -> Option<u32> {
    if field.len() != width || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// How a list's due date relates to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeliness {
    /// The due date is today.
    DueToday,
    /// The due date lies in the future.
    Upcoming,
    /// The due date has passed, or the list has none.
    Overdue,
}

/// Validated list due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Marker written by [`crate::tasklist::domain::TaskList::invalidate`].
    ///
    /// `1970-01-01` passes date validation, so an invalidated file still
    /// parses, but it is always in the past.
    #[must_use]
    pub fn invalidated() -> Self {
        Self(NaiveDate::default())
    }

    /// Parses a `YYYY-MM-DD` due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::InvalidDate`] when [`is_valid_date`] rejects
    /// the value.
    pub fn parse(value: &str) -> Result<Self, TaskListError> {
        parse_date(value)
            .map(Self)
            .ok_or_else(|| TaskListError::InvalidDate(value.to_owned()))
    }

    /// Wraps an existing calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Compares the due date against `today`.
    #[must_use]
    pub fn timeliness(self, today: NaiveDate) -> Timeliness {
        match self.0.cmp(&today) {
            Ordering::Equal => Timeliness::DueToday,
            Ordering::Greater => Timeliness::Upcoming,
            Ordering::Less => Timeliness::Overdue,
        }
    }
}

impl TryFrom<String> for DueDate {
    type Error = TaskListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}
