//! Error types for course-clock operations.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq)]
pub enum TrackerError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekDay(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),

    #[error("Color '{0}' is already used by another course")]
    ColorTaken(String),

    #[error("Course not found: {0}")]
    CourseNotFound(Uuid),

    #[error("Assignment not found: {0}")]
    AssignmentNotFound(Uuid),

    #[error("Unknown reward card: {0}")]
    UnknownCard(usize),

    #[error("Reward card {0} is already unlocked")]
    CardAlreadyUnlocked(usize),

    #[error("Not enough star points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
