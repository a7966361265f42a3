//! In-memory course and assignment book with its rewards ledger.
//!
//! Everything lives for the lifetime of the `Tracker` value; nothing is saved.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::assignment::{self, Assignment};
use crate::course::{ColorOption, Course, CourseDraft, PALETTE};
use crate::error::{Result, TrackerError};
use crate::rewards::RewardsLedger;

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    courses: Vec<Course>,
    assignments: Vec<Assignment>,
    rewards: RewardsLedger,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Courses
    // ---------------------------------------------------------------------

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: Uuid) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Palette colors not taken by any course other than `editing`.
    pub fn available_colors(&self, editing: Option<Uuid>) -> Vec<ColorOption> {
        PALETTE
            .iter()
            .copied()
            .filter(|option| {
                !self
                    .courses
                    .iter()
                    .any(|c| Some(c.id) != editing && c.color_name == option.name)
            })
            .collect()
    }

    pub fn add_course(&mut self, draft: CourseDraft) -> Result<Uuid> {
        draft.validate()?;
        self.ensure_color_free(&draft.color_name, None)?;

        let id = Uuid::new_v4();
        tracing::debug!(%id, code = %draft.code, "course added");
        self.courses.push(Course::from_draft(id, draft));
        Ok(id)
    }

    pub fn update_course(&mut self, id: Uuid, draft: CourseDraft) -> Result<()> {
        draft.validate()?;
        self.ensure_color_free(&draft.color_name, Some(id))?;

        let slot = self
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TrackerError::CourseNotFound(id))?;
        *slot = Course::from_draft(id, draft);
        tracing::debug!(%id, "course updated");
        Ok(())
    }

    /// Remove a course together with its assignments.
    pub fn remove_course(&mut self, id: Uuid) -> Result<Course> {
        let index = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(TrackerError::CourseNotFound(id))?;
        let removed = self.courses.remove(index);

        let before = self.assignments.len();
        self.assignments.retain(|a| a.course_id != id);
        tracing::debug!(
            %id,
            dropped_assignments = before - self.assignments.len(),
            "course removed"
        );
        Ok(removed)
    }

    fn ensure_color_free(&self, color_name: &str, editing: Option<Uuid>) -> Result<()> {
        let taken = self
            .courses
            .iter()
            .any(|c| Some(c.id) != editing && c.color_name == color_name);
        if taken {
            return Err(TrackerError::ColorTaken(color_name.to_string()));
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Assignments
    // ---------------------------------------------------------------------

    pub fn assignment(&self, id: Uuid) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Attach a new assignment to a course.
    ///
    /// The deadline may not be earlier than `now`, and each course holds at
    /// most [`assignment::MAX_PER_COURSE`] assignments.
    pub fn add_assignment(
        &mut self,
        course_id: Uuid,
        name: &str,
        details: &str,
        deadline: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<Uuid> {
        if name.trim().is_empty() {
            return Err(TrackerError::InvalidAssignment("name is empty".to_string()));
        }
        if name.chars().count() > assignment::MAX_NAME_CHARS {
            return Err(TrackerError::InvalidAssignment(format!(
                "name is longer than {} characters",
                assignment::MAX_NAME_CHARS
            )));
        }
        if details.chars().count() > assignment::MAX_DETAILS_CHARS {
            return Err(TrackerError::InvalidAssignment(format!(
                "details are longer than {} characters",
                assignment::MAX_DETAILS_CHARS
            )));
        }
        if deadline < now {
            return Err(TrackerError::InvalidAssignment(
                "deadline is in the past".to_string(),
            ));
        }
        if self.course(course_id).is_none() {
            return Err(TrackerError::CourseNotFound(course_id));
        }
        if self.remaining_slots(course_id) == 0 {
            return Err(TrackerError::InvalidAssignment(format!(
                "course already has {} assignments",
                assignment::MAX_PER_COURSE
            )));
        }

        let created = Assignment::new(name.to_string(), details.to_string(), deadline, course_id);
        let id = created.id;
        tracing::debug!(%id, %course_id, %deadline, "assignment added");
        self.assignments.push(created);
        Ok(id)
    }

    pub fn remove_assignment(&mut self, id: Uuid) -> Result<Assignment> {
        let index = self
            .assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or(TrackerError::AssignmentNotFound(id))?;
        Ok(self.assignments.remove(index))
    }

    /// A course's assignments, earliest deadline first.
    pub fn assignments_for(&self, course_id: Uuid) -> Vec<&Assignment> {
        let mut list: Vec<&Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .collect();
        list.sort_by_key(|a| a.deadline);
        list
    }

    pub fn assignment_count(&self, course_id: Uuid) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .count()
    }

    /// How many more assignments the course can take.
    pub fn remaining_slots(&self, course_id: Uuid) -> usize {
        assignment::MAX_PER_COURSE.saturating_sub(self.assignment_count(course_id))
    }

    /// Flip an assignment between done and not done, earning a star point when
    /// it becomes done and giving one back when it is reopened.
    ///
    /// Returns the new completion flag.
    pub fn toggle_completed(&mut self, id: Uuid) -> Result<bool> {
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(TrackerError::AssignmentNotFound(id))?;
        assignment.completed = !assignment.completed;
        let completed = assignment.completed;

        if completed {
            self.rewards.add_star_point();
        } else {
            self.rewards.remove_star_point();
        }
        tracing::debug!(%id, completed, stars = self.rewards.star_points(), "assignment toggled");
        Ok(completed)
    }

    // ---------------------------------------------------------------------
    // Rewards
    // ---------------------------------------------------------------------

    pub fn rewards(&self) -> &RewardsLedger {
        &self.rewards
    }

    pub fn unlock_card(&mut self, index: usize) -> Result<()> {
        self.rewards.try_unlock(index)
    }
}
