use super::*;
use crate::validation::{CREDIT_HOURS_RANGE, GRADE_REQUIRED, NAME_ALPHABETIC, NAME_REQUIRED};

fn filled(model: &mut CourseListModel, id: CourseId, name: &str, credits: &str, grade: &str) {
    model.update_field(id, Field::Name, name).expect("name");
    model
        .update_field(id, Field::CreditHours, credits)
        .expect("credits");
    model.update_field(id, Field::Grade, grade).expect("grade");
}

fn first_id(model: &CourseListModel) -> CourseId {
    model.courses()[0].id()
}

#[test]
fn starts_with_one_blank_course_flagged_invalid() {
    let model = CourseListModel::new();
    assert_eq!(model.len(), 1);
    assert_eq!(model.gpa(), 0.0);
    assert!(model.has_validation_errors());

    let course = &model.courses()[0];
    assert_eq!(course.name(), "");
    assert_eq!(course.errors().get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(course.errors().get(Field::CreditHours), Some(CREDIT_HOURS_RANGE));
    assert_eq!(course.errors().get(Field::Grade), Some(GRADE_REQUIRED));
}

#[test]
fn single_a_course_gives_four() {
    let mut model = CourseListModel::new();
    let id = first_id(&model);
    filled(&mut model, id, "Calculus", "3", "A");
    assert_eq!(model.gpa(), 4.0);
    assert!(!model.has_validation_errors());
    assert_eq!(format_gpa(model.gpa()), "4.00");
}

#[test]
fn two_courses_average_by_credits() {
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    filled(&mut model, a, "Calculus", "3", "A");
    let b = model.add_course().expect("add");
    filled(&mut model, b, "Biology", "3", "B");
    assert_eq!(model.gpa(), 3.5);
    assert_eq!(format_gpa(model.gpa()), "3.50");
}

#[test]
fn invalid_name_still_counts_towards_gpa() {
    let mut model = CourseListModel::new();
    let id = first_id(&model);
    filled(&mut model, id, "Math1", "2", "B");

    let course = model.course(id).expect("course");
    assert_eq!(course.errors().get(Field::Name), Some(NAME_ALPHABETIC));
    assert!(model.has_validation_errors());
    assert_eq!(model.gpa(), 3.0);
}

#[test]
fn out_of_range_credits_still_count_towards_gpa() {
    // Known quirk: aggregation does not re-check the 1-3 bound.
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    filled(&mut model, a, "Calculus", "1", "A");
    let b = model.add_course().expect("add");
    filled(&mut model, b, "Studio", "5", "C");

    let studio = model.course(b).expect("course");
    assert_eq!(studio.errors().get(Field::CreditHours), Some(CREDIT_HOURS_RANGE));
    assert_eq!(model.gpa(), (1.0 * 4.0 + 5.0 * 2.0) / 6.0);
    assert_eq!(model.countable_credits(), 6.0);
}

#[test]
fn course_without_grade_or_credits_is_not_counted() {
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    filled(&mut model, a, "Calculus", "3", "B");
    let b = model.add_course().expect("add");
    model.update_field(b, Field::CreditHours, "3").expect("credits");
    let c = model.add_course().expect("add");
    model.update_field(c, Field::Grade, "A").expect("grade");
    let d = model.add_course().expect("add");
    filled(&mut model, d, "Art", "2", "F");

    assert_eq!(model.gpa(), 3.0);
    assert_eq!(model.countable_credits(), 3.0);
    // "F" passes the presence check even though it is not in the table.
    assert!(model.course(d).expect("course").errors().is_empty());
}

#[test]
fn cancelling_credits_yield_zero() {
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    filled(&mut model, a, "One", "1", "A");
    let b = model.add_course().expect("add");
    filled(&mut model, b, "Two", "-1", "A");
    assert_eq!(model.gpa(), 0.0);
}

#[test]
fn add_stops_at_ten() {
    let mut model = CourseListModel::new();
    for _ in 1..MAX_COURSES {
        model.add_course().expect("add");
    }
    assert_eq!(model.len(), MAX_COURSES);
    assert!(!model.can_add());
    assert_eq!(
        model.add_course(),
        Err(ModelError::ListFull { max: MAX_COURSES })
    );
    assert_eq!(model.len(), MAX_COURSES);
}

#[test]
fn cannot_remove_last_course() {
    let mut model = CourseListModel::new();
    let id = first_id(&model);
    assert!(!model.can_remove());
    assert_eq!(model.remove_course(id), Err(ModelError::LastCourse));
    assert_eq!(model.len(), 1);
    assert_eq!(first_id(&model), id);
}

#[test]
fn remove_returns_the_removed_course() {
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    let b = model.add_course().expect("add");
    model.update_field(b, Field::Name, "Chemistry").expect("name");

    let removed = model.remove_course(b).expect("remove");
    assert_eq!(removed.id(), b);
    assert_eq!(removed.name(), "Chemistry");
    assert_eq!(model.len(), 1);
    assert_eq!(first_id(&model), a);
    assert!(model.course(b).is_none());
}

#[test]
fn unknown_ids_leave_state_untouched() {
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    let b = model.add_course().expect("add");
    model.remove_course(b).expect("remove");

    let before = model.courses().to_vec();
    assert_eq!(model.remove_course(b), Err(ModelError::NotFound(b)));
    assert_eq!(
        model.update_field(b, Field::Name, "Ghost").map(|c| c.id()),
        Err(ModelError::NotFound(b))
    );
    assert_eq!(model.courses(), before.as_slice());
    assert_eq!(first_id(&model), a);
}

#[test]
fn ids_are_never_reused() {
    let mut model = CourseListModel::new();
    let mut seen = vec![first_id(&model)];
    for _ in 0..25 {
        let id = model.add_course().expect("add");
        assert!(!seen.contains(&id));
        seen.push(id);
        model.remove_course(id).expect("remove");
    }
}

#[test]
fn update_revalidates_every_field() {
    let mut model = CourseListModel::new();
    let id = first_id(&model);
    let course = model.update_field(id, Field::Grade, "B+").expect("grade");
    assert_eq!(course.errors().len(), 2);
    assert_eq!(course.errors().get(Field::Grade), None);

    let course = model.update_field(id, Field::Grade, "").expect("grade");
    assert_eq!(course.errors().get(Field::Grade), Some(GRADE_REQUIRED));
}

#[test]
fn errors_flag_clears_once_every_course_is_valid() {
    let mut model = CourseListModel::new();
    let a = first_id(&model);
    filled(&mut model, a, "Calculus", "3", "A");
    let b = model.add_course().expect("add");
    assert!(model.has_validation_errors());

    filled(&mut model, b, "Biology", "2", "C");
    assert!(!model.has_validation_errors());

    model.update_field(b, Field::CreditHours, "4").expect("credits");
    assert!(model.has_validation_errors());
    model.remove_course(b).expect("remove");
    assert!(!model.has_validation_errors());
}
