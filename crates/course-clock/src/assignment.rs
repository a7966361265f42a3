//! Assignments attached to courses, and how long is left until they are due.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Open assignment slots each course has.
pub const MAX_PER_COURSE: usize = 5;

/// Longest assignment name, in characters.
pub const MAX_NAME_CHARS: usize = 32;

/// Longest assignment details text, in characters.
pub const MAX_DETAILS_CHARS: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub deadline: NaiveDateTime,
    pub course_id: Uuid,
    pub completed: bool,
}

impl Assignment {
    pub fn new(name: String, details: String, deadline: NaiveDateTime, course_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            details,
            deadline,
            course_id,
            completed: false,
        }
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        now > self.deadline
    }

    pub fn time_until_deadline(&self, now: NaiveDateTime) -> DeadlineStatus {
        DeadlineStatus::between(now, self.deadline)
    }
}

/// Time remaining before a deadline, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    PastDue,
    /// Less than a minute remains.
    DueNow,
    Remaining { days: i64, hours: i64, minutes: i64 },
}

impl DeadlineStatus {
    pub fn between(now: NaiveDateTime, deadline: NaiveDateTime) -> Self {
        let left = deadline - now;
        if left < chrono::Duration::zero() {
            return DeadlineStatus::PastDue;
        }
        let total_minutes = left.num_minutes();
        if total_minutes == 0 {
            return DeadlineStatus::DueNow;
        }
        DeadlineStatus::Remaining {
            days: total_minutes / (24 * 60),
            hours: (total_minutes % (24 * 60)) / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DeadlineStatus::PastDue => f.write_str("Past due"),
            DeadlineStatus::DueNow => f.write_str("Due now"),
            DeadlineStatus::Remaining {
                days,
                hours,
                minutes,
            } => {
                // Zero parts are dropped: "2d 5m", not "2d 0h 5m".
                let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m")]
                    .into_iter()
                    .filter(|(value, _)| *value > 0)
                    .map(|(value, unit)| format!("{}{}", value, unit))
                    .collect();
                f.write_str(&parts.join(" "))
            }
        }
    }
}
