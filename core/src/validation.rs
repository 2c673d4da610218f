//! Per-field validation rules.
//!
//! Each rule looks at one raw field value only. `validate_course` runs all
//! three and collects the failures into a `FieldErrors`.

use crate::course::{Field, FieldErrors};

pub const NAME_REQUIRED: &str = "Course name is required";
pub const NAME_ALPHABETIC: &str = "Only alphabetic characters allowed";
pub const CREDIT_HOURS_RANGE: &str = "Must be between 1-3";
pub const GRADE_REQUIRED: &str = "Grade is required";

pub const MIN_CREDIT_HOURS: f64 = 1.0;
pub const MAX_CREDIT_HOURS: f64 = 3.0;

pub fn validate_name(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(NAME_REQUIRED)
    } else if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        Some(NAME_ALPHABETIC)
    } else {
        None
    }
}

pub fn validate_credit_hours(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(CREDIT_HOURS_RANGE);
    }
    match parse_credit_hours(value) {
        Some(hours) if (MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&hours) => None,
        _ => Some(CREDIT_HOURS_RANGE),
    }
}

/// Only presence is checked; membership in the grade table is not.
pub fn validate_grade(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(GRADE_REQUIRED)
    } else {
        None
    }
}

pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Name => validate_name(value),
        Field::CreditHours => validate_credit_hours(value),
        Field::Grade => validate_grade(value),
    }
}

/// Validates all three fields of a course.
pub fn validate_course(name: &str, credit_hours: &str, grade: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (field, value) in [
        (Field::Name, name),
        (Field::CreditHours, credit_hours),
        (Field::Grade, grade),
    ] {
        if let Some(message) = validate_field(field, value) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Parses the leading number of a credit-hours entry.
///
/// Leading whitespace is skipped and the longest prefix shaped like
/// `[+-]digits[.digits][e[+-]digits]` is parsed, so `"2.5 hrs"` yields 2.5.
/// Returns `None` when no digits lead the input or the value is not finite.
pub fn parse_credit_hours(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let int_digits = int_end - end;
    end = int_end;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        frac_digits = frac_end - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
