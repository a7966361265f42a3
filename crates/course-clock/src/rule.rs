//! Weekly recurrence rules for course meetings.

use std::collections::BTreeSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::weekday::WeekDay;

/// "Meets on each of `days`, from `daily_start` to `daily_end`, every week."
///
/// `daily_end` may be earlier than `daily_start` on the clock (e.g. 23:00–01:00);
/// such a window runs into the next calendar day. The rule itself is never
/// validated here. Course validation lives in [`crate::course::CourseDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub days: BTreeSet<WeekDay>,
    #[serde(rename = "start", with = "time_of_day")]
    pub daily_start: NaiveTime,
    #[serde(rename = "end", with = "time_of_day")]
    pub daily_end: NaiveTime,
}

impl RecurrenceRule {
    pub fn new(
        days: impl IntoIterator<Item = WeekDay>,
        daily_start: NaiveTime,
        daily_end: NaiveTime,
    ) -> Self {
        Self {
            days: days.into_iter().collect(),
            daily_start,
            daily_end,
        }
    }

    /// True when the window's end clock-time is before its start.
    pub fn spans_midnight(&self) -> bool {
        self.daily_end < self.daily_start
    }

    /// Meeting days in Monday-first display order.
    pub fn sorted_days(&self) -> Vec<WeekDay> {
        let mut days: Vec<WeekDay> = self.days.iter().copied().collect();
        days.sort_by_key(|day| day.display_index());
        days
    }
}

/// Parse a wall-clock time written as `HH:MM:SS` or `HH:MM`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| TrackerError::InvalidTime(s.to_string()))
}

/// Serde adapter: times go out as `HH:MM:SS` and come in as either form
/// accepted by [`parse_time_of_day`].
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(de::Error::custom)
    }
}
