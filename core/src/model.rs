//! Course List Model
//!
//! `CourseListModel` owns the ordered list of courses and keeps two derived
//! values in step with it:
//!
//! - `gpa`: the credit-weighted mean of grade points over every countable
//!   course
//! - `has_errors`: whether any course currently carries a validation message
//!
//! Both are recomputed at the end of every mutating operation. A course counts
//! towards the GPA when its credit hours parse and its grade is in the table;
//! its validation state is not consulted, so a course with an invalid name or
//! out-of-range credits still moves the GPA.

use crate::course::{Course, CourseId, Field};
use crate::error::ModelError;
use crate::grade::Grade;
use crate::validation::{parse_credit_hours, validate_course};
use tracing::{debug, warn};

pub const MIN_COURSES: usize = 1;
pub const MAX_COURSES: usize = 10;

#[derive(Debug, Clone)]
pub struct CourseListModel {
    courses: Vec<Course>,
    next_id: u64,
    gpa: f64,
    has_errors: bool,
}

impl Default for CourseListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseListModel {
    /// A model holding one blank course.
    pub fn new() -> Self {
        let mut model = Self {
            courses: Vec::with_capacity(MAX_COURSES),
            next_id: 1,
            gpa: 0.0,
            has_errors: false,
        };
        model.push_blank();
        model.recompute();
        model
    }

    /// Appends a blank course and returns its id.
    pub fn add_course(&mut self) -> Result<CourseId, ModelError> {
        if !self.can_add() {
            warn!(len = self.courses.len(), "add_course refused: list is full");
            return Err(ModelError::ListFull { max: MAX_COURSES });
        }
        let id = self.push_blank();
        self.recompute();
        debug!(%id, len = self.courses.len(), "course added");
        Ok(id)
    }

    /// Removes a course and hands it back.
    pub fn remove_course(&mut self, id: CourseId) -> Result<Course, ModelError> {
        let index = self.position(id).ok_or(ModelError::NotFound(id))?;
        if !self.can_remove() {
            warn!(%id, "remove_course refused: last remaining course");
            return Err(ModelError::LastCourse);
        }
        let removed = self.courses.remove(index);
        self.recompute();
        debug!(%id, len = self.courses.len(), "course removed");
        Ok(removed)
    }

    /// Sets one field of a course and re-validates all of its fields.
    pub fn update_field(
        &mut self,
        id: CourseId,
        field: Field,
        value: impl Into<String>,
    ) -> Result<&Course, ModelError> {
        let index = self.position(id).ok_or(ModelError::NotFound(id))?;

        let course = &mut self.courses[index];
        course.set(field, value.into());
        course.errors = validate_course(&course.name, &course.credit_hours, &course.grade);
        debug!(%id, %field, errors = course.errors.len(), "course field updated");

        self.recompute();
        Ok(&self.courses[index])
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }

    pub fn position(&self, id: CourseId) -> Option<usize> {
        self.courses.iter().position(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Always false; the list never drops below one course.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn can_add(&self) -> bool {
        self.courses.len() < MAX_COURSES
    }

    pub fn can_remove(&self) -> bool {
        self.courses.len() > MIN_COURSES
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn has_validation_errors(&self) -> bool {
        self.has_errors
    }

    /// Sum of credit hours over the courses that count towards the GPA.
    pub fn countable_credits(&self) -> f64 {
        self.courses
            .iter()
            .filter_map(contribution)
            .map(|(credits, _)| credits)
            .sum()
    }

    fn push_blank(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;

        let mut course = Course::blank(id);
        course.errors = validate_course(&course.name, &course.credit_hours, &course.grade);
        self.courses.push(course);
        id
    }

    fn recompute(&mut self) {
        let mut total_points = 0.0;
        let mut total_credits = 0.0;
        let mut any_counted = false;

        for (credits, points) in self.courses.iter().filter_map(contribution) {
            total_points += credits * points;
            total_credits += credits;
            any_counted = true;
        }

        // Opposite-signed credits can cancel out.
        self.gpa = if any_counted && total_credits != 0.0 {
            total_points / total_credits
        } else {
            0.0
        };
        self.has_errors = self.courses.iter().any(|c| !c.errors.is_empty());
    }
}

/// `(credits, grade points)` for a course that counts towards the GPA.
fn contribution(course: &Course) -> Option<(f64, f64)> {
    let credits = parse_credit_hours(&course.credit_hours)?;
    let points = Grade::lookup(&course.grade)?;
    Some((credits, points))
}

/// Renders a GPA the way the result panel shows it.
pub fn format_gpa(gpa: f64) -> String {
    format!("{:.2}", gpa)
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
