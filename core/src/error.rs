use crate::course::CourseId;
use thiserror::Error;

/// Reasons a model operation was refused.
///
/// A refused operation never changes the model, so callers that only want
/// "fail silently" semantics can drop the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("course list is full ({max} courses maximum)")]
    ListFull { max: usize },

    #[error("cannot remove the last remaining course")]
    LastCourse,

    #[error("no course with id {0}")]
    NotFound(CourseId),

    #[error("unknown course field '{0}'")]
    UnknownField(String),

    #[error("unknown letter grade '{0}'")]
    UnknownGrade(String),
}
