//! Next-occurrence resolution for weekly recurrence rules.
//!
//! Scans today plus the following seven calendar days (eight candidate dates),
//! binds the rule's daily window onto every date whose weekday is in the rule,
//! and keeps the earliest window that either starts at or after the reference
//! instant or is still in progress at it. Eight dates cover a full week forward
//! as well as a window that started today and wraps past midnight.

use chrono::{Days, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::rule::RecurrenceRule;
use crate::weekday::WeekDay;

/// Number of calendar days scanned after the reference date.
const SCAN_DAYS: u64 = 7;

/// One concrete meeting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Occurrence {
    /// Bind a rule's daily window onto `date`, pushing the end into the next
    /// day when the window wraps past midnight.
    ///
    /// Returns `None` when that next day is past the end of the calendar.
    pub fn on_date(rule: &RecurrenceRule, date: NaiveDate) -> Option<Self> {
        let start = date.and_time(rule.daily_start);
        let mut end = date.and_time(rule.daily_end);
        if end < start {
            end = end.checked_add_days(Days::new(1))?;
        }
        Some(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open containment: `start <= now < end`.
    pub fn is_in_progress(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now < self.end
    }

    /// Eligibility for resolution: starts at or after `from`, or `from` lies
    /// within the closed window `[start, end]`.
    fn is_eligible(&self, from: NaiveDateTime) -> bool {
        self.start >= from || (self.start <= from && from <= self.end)
    }
}

/// Find the nearest occurrence of `rule` containing or following `from`.
///
/// Returns `None` when no candidate in the scan is eligible. That happens when
/// `rule.days` is empty, or at the very end of the calendar where the scan
/// runs out of dates. Callers treat it as "no schedule".
pub fn next_occurrence(rule: &RecurrenceRule, from: NaiveDateTime) -> Option<Occurrence> {
    let today = from.date();

    let nearest = (0..=SCAN_DAYS)
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|date| rule.days.contains(&WeekDay::of(*date)))
        .filter_map(|date| Occurrence::on_date(rule, date))
        .filter(|occurrence| occurrence.is_eligible(from))
        .min_by_key(|occurrence| occurrence.start);

    match nearest {
        Some(occurrence) => {
            tracing::debug!(
                %from,
                start = %occurrence.start,
                end = %occurrence.end,
                "resolved next occurrence"
            );
        }
        None => {
            tracing::warn!(%from, days = rule.days.len(), "no eligible occurrence in scan window");
        }
    }

    nearest
}
