//! # course-clock
//!
//! Weekly class schedules, live countdowns and the in-memory course tracker
//! built on top of them.
//!
//! The schedule engine is pure: every answer is recomputed from a recurrence
//! rule and a local wall-clock instant, so a caller-owned one-second tick is
//! all a live display needs.
//!
//! ## Modules
//!
//! - [`weekday`] — days of the week, ordinals and display names
//! - [`rule`] — weekly recurrence rules (days + daily time window)
//! - [`occurrence`] — resolve the next concrete meeting window
//! - [`countdown`] — before-start / during-class countdown state
//! - [`format`] — fixed-template duration strings
//! - [`course`] — courses, card colors and course validation
//! - [`assignment`] — assignments and deadline status
//! - [`rewards`] — star points and reward cards
//! - [`tracker`] — in-memory store tying courses, assignments and rewards together
//! - [`error`] — Error types

pub mod assignment;
pub mod countdown;
pub mod course;
pub mod error;
pub mod format;
pub mod occurrence;
pub mod rewards;
pub mod rule;
pub mod tracker;
pub mod weekday;

pub use assignment::{Assignment, DeadlineStatus};
pub use countdown::{countdown_state, CountdownState};
pub use course::{ColorOption, Course, CourseDraft};
pub use error::TrackerError;
pub use format::format_duration;
pub use occurrence::{next_occurrence, Occurrence};
pub use rewards::RewardsLedger;
pub use rule::{parse_time_of_day, RecurrenceRule};
pub use tracker::Tracker;
pub use weekday::WeekDay;
