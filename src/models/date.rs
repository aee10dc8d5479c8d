//! Transaction timestamps
//!
//! Dates are persisted exactly as they were written (a calendar date, a local
//! date-time, or an RFC 3339 instant) and interpreted on demand. A value that
//! cannot be interpreted is reported as `None` so date-scoped views can drop
//! the entry instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The raw date of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDate(String);

impl TransactionDate {
    /// Wrap a raw value without validating it
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A date-only value (`YYYY-MM-DD`)
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// A local date-time value (`YYYY-MM-DDTHH:MM:SS`)
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Interpret the value as a wall-clock timestamp
    ///
    /// Date-only values map to the start of the day. RFC 3339 values keep the
    /// wall-clock reading of their own offset, so `2024-03-01T00:00:00Z` is
    /// midnight on March 1st regardless of where it is read.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.naive_local());
        }
        for format in DATE_TIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(datetime);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }

    /// The calendar day of the value, if it can be interpreted
    pub fn day(&self) -> Option<NaiveDate> {
        self.timestamp().map(|ts| ts.date())
    }

    /// Render the day with a strftime pattern, or the raw text if unreadable
    pub fn format_day(&self, pattern: &str) -> String {
        match self.day() {
            Some(day) => day.format(pattern).to_string(),
            None => self.0.clone(),
        }
    }
}

impl From<NaiveDate> for TransactionDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<NaiveDateTime> for TransactionDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_datetime(datetime)
    }
}

impl fmt::Display for TransactionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
