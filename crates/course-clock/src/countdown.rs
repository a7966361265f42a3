//! Live countdown state for a course card.
//!
//! The state is recomputed from `(rule, now)` on every tick. Nothing is cached
//! and there is no stored transition between states.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

use crate::format::format_duration;
use crate::occurrence::next_occurrence;
use crate::rule::RecurrenceRule;

/// Where `now` sits relative to a course's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// The next meeting has not started yet.
    BeforeStart { time_left: Duration },
    /// A meeting is in progress; `time_left` counts down to its end.
    DuringClass { time_left: Duration },
    /// No occurrence could be resolved (the rule has no days).
    Waiting,
}

impl CountdownState {
    pub fn time_left(&self) -> Option<Duration> {
        match self {
            CountdownState::BeforeStart { time_left } | CountdownState::DuringClass { time_left } => {
                Some(*time_left)
            }
            CountdownState::Waiting => None,
        }
    }
}

impl fmt::Display for CountdownState {
    /// Course-card line: days are shown before a class, only hours during one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownState::BeforeStart { time_left } => {
                write!(f, "Starts in ≈ {}", format_duration(time_left.num_seconds(), true))
            }
            CountdownState::DuringClass { time_left } => {
                write!(f, "Ends in ≈ {}", format_duration(time_left.num_seconds(), false))
            }
            CountdownState::Waiting => f.write_str("No schedule"),
        }
    }
}

/// Derive the countdown for `rule` at `now`.
///
/// Yields [`CountdownState::Waiting`] whenever no occurrence can be resolved.
///
/// A resolved occurrence that `now` sits exactly at the end of (a class that
/// just finished, or a zero-length window) is not actionable, so resolution is
/// retried one minute past its end and the countdown targets that start.
pub fn countdown_state(rule: &RecurrenceRule, now: NaiveDateTime) -> CountdownState {
    let Some(occurrence) = next_occurrence(rule, now) else {
        return CountdownState::Waiting;
    };

    if occurrence.is_in_progress(now) {
        return CountdownState::DuringClass {
            time_left: occurrence.end - now,
        };
    }

    if now < occurrence.start {
        return CountdownState::BeforeStart {
            time_left: occurrence.start - now,
        };
    }

    occurrence
        .end
        .checked_add_signed(Duration::minutes(1))
        .and_then(|retry_from| next_occurrence(rule, retry_from))
        .map_or(CountdownState::Waiting, |following| {
            CountdownState::BeforeStart {
                time_left: following.start - now,
            }
        })
}
