//! Course entries and their derived per-field error sets.

use crate::error::ModelError;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// Opaque course identifier. Minted by `CourseListModel` and never reused
/// within one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(pub(crate) u64);

impl CourseId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The user-editable fields of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    CreditHours,
    Grade,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::CreditHours, Field::Grade];

    /// Key the field is addressed by at the model boundary.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::CreditHours => "creditHours",
            Field::Grade => "grade",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Course Name",
            Field::CreditHours => "Credits",
            Field::Grade => "Grade",
        }
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "creditHours" | "credit_hours" => Ok(Field::CreditHours),
            "grade" => Ok(Field::Grade),
            other => Err(ModelError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation messages keyed by field. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, String> {
        self.0.iter()
    }

    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// One row of the course list.
///
/// Field values are kept exactly as typed. `errors` is only ever written by
/// the model, right after a field changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    pub(crate) name: String,
    pub(crate) credit_hours: String,
    pub(crate) grade: String,
    pub(crate) errors: FieldErrors,
}

impl Course {
    pub(crate) fn blank(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            credit_hours: String::new(),
            grade: String::new(),
            errors: FieldErrors::default(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit_hours(&self) -> &str {
        &self.credit_hours
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::CreditHours => &self.credit_hours,
            Field::Grade => &self.grade,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::CreditHours => self.credit_hours = value,
            Field::Grade => self.grade = value,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
