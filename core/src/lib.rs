//! GPA Core
//!
//! The functional core of the GPA calculator:
//!
//! - `grade`: the fixed letter grade to grade-point table
//! - `course`: course entries, their ids and per-field error sets
//! - `validation`: per-field validation rules and the credit-hours parser
//! - `model`: `CourseListModel`, which owns the course list and derives the
//!   cumulative GPA and the overall validity flag
//!
//! Nothing here knows about rendering. A front end reads the model's state and
//! forwards user edits back through `CourseListModel`'s operations.

pub mod course;
pub mod error;
pub mod grade;
pub mod model;
pub mod validation;

pub use course::{Course, CourseId, Field, FieldErrors};
pub use error::ModelError;
pub use grade::Grade;
pub use model::{format_gpa, CourseListModel, MAX_COURSES, MIN_COURSES};
