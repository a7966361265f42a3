//! Courses, their card colors, and course form validation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::countdown::{countdown_state, CountdownState};
use crate::error::{Result, TrackerError};
use crate::rule::RecurrenceRule;

/// A named card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

/// Color used when a course names a color outside the palette.
pub const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);

pub const PALETTE: [ColorOption; 7] = [
    ColorOption {
        name: "Crimson",
        rgb: (220, 20, 60),
    },
    ColorOption {
        name: "Azure",
        rgb: (0, 127, 255),
    },
    ColorOption {
        name: "Emerald",
        rgb: (46, 204, 113),
    },
    ColorOption {
        name: "Goldenrod",
        rgb: (218, 165, 32),
    },
    ColorOption {
        name: "Amethyst",
        rgb: (153, 102, 204),
    },
    ColorOption {
        name: "Coral",
        rgb: (255, 127, 80),
    },
    ColorOption {
        name: "Slate Gray",
        rgb: (112, 128, 144),
    },
];

impl ColorOption {
    pub fn find(name: &str) -> Option<ColorOption> {
        PALETTE.iter().copied().find(|option| option.name == name)
    }

    /// RGB for a color name, gray when the name is not in the palette.
    pub fn rgb_for(name: &str) -> (u8, u8, u8) {
        Self::find(name).map_or(FALLBACK_RGB, |option| option.rgb)
    }
}

/// Longest course name the course form accepts, in characters.
pub const MAX_NAME_CHARS: usize = 40;

/// Longest course code the course form accepts, in characters.
pub const MAX_CODE_CHARS: usize = 8;

/// The fields a user fills in to create or edit a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub name: String,
    pub code: String,
    #[serde(flatten)]
    pub schedule: RecurrenceRule,
    #[serde(rename = "color")]
    pub color_name: String,
}

impl CourseDraft {
    /// Reject drafts the course form would not let through.
    ///
    /// Unlike a plain end-after-start check, windows that wrap past midnight
    /// are accepted since occurrence resolution supports them. Only an empty
    /// window (`start == end`) is refused.
    ///
    /// Codes are compared after uppercasing, which is how they are stored.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidCourse("name is empty".to_string()));
        }
        if self.name.chars().count() > MAX_NAME_CHARS {
            return Err(TrackerError::InvalidCourse(format!(
                "name is longer than {} characters",
                MAX_NAME_CHARS
            )));
        }
        if self.code.trim().is_empty() {
            return Err(TrackerError::InvalidCourse("code is empty".to_string()));
        }
        if self.code.to_uppercase().chars().count() > MAX_CODE_CHARS {
            return Err(TrackerError::InvalidCourse(format!(
                "code is longer than {} characters",
                MAX_CODE_CHARS
            )));
        }
        if self.color_name.trim().is_empty() {
            return Err(TrackerError::InvalidCourse("no color selected".to_string()));
        }
        if self.schedule.days.is_empty() {
            return Err(TrackerError::InvalidCourse(
                "at least one meeting day is required".to_string(),
            ));
        }
        if self.schedule.daily_start == self.schedule.daily_end {
            return Err(TrackerError::InvalidCourse(
                "start and end time are the same".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub schedule: RecurrenceRule,
    pub color_name: String,
}

impl Course {
    pub(crate) fn from_draft(id: Uuid, draft: CourseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            code: draft.code.to_uppercase(),
            schedule: draft.schedule,
            color_name: draft.color_name,
        }
    }

    pub fn countdown(&self, now: NaiveDateTime) -> CountdownState {
        countdown_state(&self.schedule, now)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        ColorOption::rgb_for(&self.color_name)
    }

    /// One-line card summary: code, name, window, days and countdown.
    pub fn card_line(&self, now: NaiveDateTime) -> String {
        let days: Vec<&str> = self
            .schedule
            .sorted_days()
            .into_iter()
            .map(|day| day.short_name())
            .collect();
        format!(
            "{}  {}  {} - {}  {}  {}",
            self.code,
            self.name,
            self.schedule.daily_start.format("%-I:%M %p"),
            self.schedule.daily_end.format("%-I:%M %p"),
            days.join(" "),
            self.countdown(now)
        )
    }
}
