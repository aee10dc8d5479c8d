//! Named date filters and the intervals they resolve to
//!
//! Every interval is inclusive at day granularity: it starts at the first
//! instant of its first day and ends at the last instant of its last day.
//! Resolution is anchored on an explicit `now`.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::TransactionDate;

/// A clock-relative date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl DateFilter {
    pub fn all() -> &'static [DateFilter] {
        &[
            Self::All,
            Self::Today,
            Self::Yesterday,
            Self::ThisWeek,
            Self::ThisMonth,
            Self::LastMonth,
            Self::ThisYear,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this-week",
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::ThisYear => "this-year",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|filter| filter.key() == normalized)
            .ok_or_else(|| format!("unknown date filter '{}'", s.trim()))
    }
}

/// An inclusive interval of instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// The range covering whole days `first..=last`
    pub fn days(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.first_day(), self.last_day())
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999999999 is always a valid time
    date.and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN))
}

/// First and last day of a calendar month, `None` for an invalid month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

/// The (year, month) preceding the given one
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Resolve a filter to a concrete interval; `None` means unbounded
pub fn resolve(filter: DateFilter, now: NaiveDateTime) -> Option<DateRange> {
    let today = now.date();

    match filter {
        DateFilter::All => None,
        DateFilter::Today => Some(DateRange::days(today, today)),
        DateFilter::Yesterday => {
            let yesterday = today.pred_opt().unwrap_or(today);
            Some(DateRange::days(yesterday, yesterday))
        }
        DateFilter::ThisWeek => {
            let since_monday = u64::from(today.weekday().num_days_from_monday());
            let monday = today.checked_sub_days(Days::new(since_monday)).unwrap_or(today);
            let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(today);
            Some(DateRange::days(monday, sunday))
        }
        DateFilter::ThisMonth => {
            month_bounds(today.year(), today.month()).map(|(first, last)| DateRange::days(first, last))
        }
        DateFilter::LastMonth => {
            let (year, month) = previous_month(today.year(), today.month());
            month_bounds(year, month).map(|(first, last)| DateRange::days(first, last))
        }
        DateFilter::ThisYear => {
            let first = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
            let last = NaiveDate::from_ymd_opt(today.year(), 12, 31)?;
            Some(DateRange::days(first, last))
        }
    }
}

/// Membership test; an unbounded range contains everything
pub fn in_range(timestamp: NaiveDateTime, range: Option<&DateRange>) -> bool {
    range.map_or(true, |range| range.contains(timestamp))
}

/// Membership test on a stored date
///
/// With a bounded range, a date that cannot be interpreted is excluded.
pub fn date_in_range(date: &TransactionDate, range: Option<&DateRange>) -> bool {
    match range {
        None => true,
        Some(range) => date.timestamp().is_some_and(|ts| range.contains(ts)),
    }
}
