//! Days of the week as the tracker sees them.
//!
//! Ordinals follow the calendar convention Sunday=1 … Saturday=7, which is what
//! occurrence matching compares against. Display order is separate and starts on
//! Monday, the way course cards list meeting days.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// A day a course can meet on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// All seven days in ordinal order (Sunday first).
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Sunday,
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
    ];

    /// Calendar ordinal, Sunday=1 through Saturday=7.
    pub fn ordinal(self) -> u32 {
        match self {
            WeekDay::Sunday => 1,
            WeekDay::Monday => 2,
            WeekDay::Tuesday => 3,
            WeekDay::Wednesday => 4,
            WeekDay::Thursday => 5,
            WeekDay::Friday => 6,
            WeekDay::Saturday => 7,
        }
    }

    /// Position in a Monday-first listing (Monday=0 … Sunday=6).
    pub fn display_index(self) -> u32 {
        (self.ordinal() + 5) % 7
    }

    pub fn short_name(self) -> &'static str {
        match self {
            WeekDay::Sunday => "Sun",
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tues",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thur",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeekDay::Sunday => "Sunday",
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
        }
    }

    /// The weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => WeekDay::Sunday,
            Weekday::Mon => WeekDay::Monday,
            Weekday::Tue => WeekDay::Tuesday,
            Weekday::Wed => WeekDay::Wednesday,
            Weekday::Thu => WeekDay::Thursday,
            Weekday::Fri => WeekDay::Friday,
            Weekday::Sat => WeekDay::Saturday,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeekDay {
    type Err = TrackerError;

    /// Accepts full names ("Monday"), card short names ("Tues", "Thur") and
    /// three-letter abbreviations ("tue", "thu"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        WeekDay::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                needle == name
                    || needle == day.short_name().to_ascii_lowercase()
                    || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| TrackerError::InvalidWeekDay(s.to_string()))
    }
}
