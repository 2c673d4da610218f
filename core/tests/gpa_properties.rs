use gpa_core::{CourseId, CourseListModel, Field, Grade, MAX_COURSES};

const EPSILON: f64 = 1e-9;

fn fill(model: &mut CourseListModel, id: CourseId, name: &str, credits: &str, grade: &str) {
    model.update_field(id, Field::Name, name).expect("name");
    model
        .update_field(id, Field::CreditHours, credits)
        .expect("credits");
    model.update_field(id, Field::Grade, grade).expect("grade");
}

fn weighted_mean(entries: &[(f64, Grade)]) -> f64 {
    let points: f64 = entries.iter().map(|(c, g)| c * g.points()).sum();
    let credits: f64 = entries.iter().map(|(c, _)| c).sum();
    points / credits
}

#[test]
fn gpa_is_credit_weighted_mean_over_countable_courses() {
    let entries = [
        ("Calculus", 3.0, Grade::A),
        ("Biology1", 2.0, Grade::BMinus),
        ("Poetry", 1.5, Grade::CPlus),
        ("Ethics", 1.0, Grade::DPlus),
    ];

    let mut model = CourseListModel::new();
    let mut ids = vec![model.courses()[0].id()];
    for _ in 1..entries.len() {
        ids.push(model.add_course().expect("add"));
    }
    for (id, (name, credits, grade)) in ids.iter().zip(entries) {
        fill(&mut model, *id, name, &credits.to_string(), grade.as_str());
    }
    // A trailing course with no grade contributes nothing.
    let blank = model.add_course().expect("add");
    model
        .update_field(blank, Field::CreditHours, "3")
        .expect("credits");

    let expected = weighted_mean(&entries.map(|(_, c, g)| (c, g)));
    assert!((model.gpa() - expected).abs() < EPSILON);
    assert!(model.has_validation_errors());
}

#[test]
fn adding_a_course_keeps_existing_contributions() {
    let mut model = CourseListModel::new();
    let first = model.courses()[0].id();
    fill(&mut model, first, "Calculus", "3", "B+");
    let before = model.gpa();

    model.add_course().expect("add");
    assert_eq!(model.gpa(), before);
}

#[test]
fn removing_a_course_removes_exactly_its_contribution() {
    let mut model = CourseListModel::new();
    let first = model.courses()[0].id();
    fill(&mut model, first, "Calculus", "3", "A-");
    let alone = model.gpa();

    let second = model.add_course().expect("add");
    fill(&mut model, second, "Drawing", "2", "C");
    assert!((model.gpa() - weighted_mean(&[(3.0, Grade::AMinus), (2.0, Grade::C)])).abs() < EPSILON);

    model.remove_course(second).expect("remove");
    assert!((model.gpa() - alone).abs() < EPSILON);
}

#[test]
fn list_size_stays_within_bounds() {
    let mut model = CourseListModel::new();
    for _ in 0..MAX_COURSES * 2 {
        let _ = model.add_course();
        assert!(model.len() <= MAX_COURSES);
    }
    assert_eq!(model.len(), MAX_COURSES);

    let ids: Vec<CourseId> = model.courses().iter().map(|c| c.id()).collect();
    for id in ids {
        let _ = model.remove_course(id);
        assert!(model.len() >= 1);
    }
    assert_eq!(model.len(), 1);
}

#[test]
fn repeating_an_update_is_idempotent() {
    let mut model = CourseListModel::new();
    let id = model.courses()[0].id();
    fill(&mut model, id, "Math1", "2.5", "A");

    let mut twice = model.clone();
    model.update_field(id, Field::CreditHours, "7").expect("once");
    twice.update_field(id, Field::CreditHours, "7").expect("first");
    twice.update_field(id, Field::CreditHours, "7").expect("second");

    assert_eq!(model.courses(), twice.courses());
    assert_eq!(model.gpa(), twice.gpa());
    assert_eq!(model.has_validation_errors(), twice.has_validation_errors());
}

#[test]
fn fields_are_addressable_by_key() {
    let mut model = CourseListModel::new();
    let id = model.courses()[0].id();
    for (key, value) in [("name", "Statistics"), ("creditHours", "2"), ("grade", "B")] {
        let field: Field = key.parse().expect("field key");
        model.update_field(id, field, value).expect("update");
    }
    assert!(!model.has_validation_errors());
    assert_eq!(model.gpa(), 3.0);
    assert!("credits".parse::<Field>().is_err());
}
