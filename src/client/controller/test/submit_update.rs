use super::*;

/// Tests updating a record with identical values.
///
/// Verifies that the PUT still goes out but the notice carries no diff text.
///
/// Expected: "No changes made to student record"
#[tokio::test]
async fn identical_values_report_no_changes() {
    let api = MockStudentApi::with_students(vec![student(1, "Al", "Math", 70)]);
    let controller = StudentListController::new(&api);

    let report = finished(controller.submit(&edit_form(1, "Al", "Math", "70")).await);

    assert!(report.completed);
    assert_eq!(messages(&report), vec!["No changes made to student record"]);
    assert!(!report.notices[0].message.contains(" from "));
    assert_eq!(
        api.calls(),
        vec![
            Call::Get(1),
            Call::Update(student(1, "Al", "Math", 70)),
            Call::List,
        ]
    );
}

/// Tests updating the marks of a record.
///
/// Expected: notice contains "marks from 70 to 85"
#[tokio::test]
async fn changed_marks_are_described() {
    let api = MockStudentApi::with_students(vec![student(1, "Al", "Math", 70)]);
    let controller = StudentListController::new(&api);

    let report = finished(controller.submit(&edit_form(1, "Al", "Math", "85")).await);

    assert_eq!(messages(&report), vec!["Updated student's marks from 70 to 85"]);
    assert_eq!(report.students, Some(vec![student(1, "Al", "Math", 85)]));
}

/// Tests that an edit never goes through the duplicate check.
///
/// Verifies that renaming onto another record's (name, subject) is a plain PUT.
///
/// Expected: no merge prompt, PUT with the submitted values
#[tokio::test]
async fn edit_skips_duplicate_check() {
    let api = MockStudentApi::with_students(vec![
        student(1, "Al", "Math", 70),
        student(2, "Bo", "Math", 40),
    ]);
    let controller = StudentListController::new(&api);

    let report = finished(controller.submit(&edit_form(2, "al", "Math", "40")).await);

    assert!(report.completed);
    assert_eq!(
        api.mutations(),
        vec![Call::Update(student(2, "al", "Math", 40))]
    );
    assert_eq!(
        messages(&report),
        vec!["Updated student's name from \"Bo\" to \"al\""]
    );
}

/// Tests a failure fetching the original record.
///
/// Expected: "Error fetching original student data" and no PUT
#[tokio::test]
async fn original_fetch_failure_stops_update() {
    let api = MockStudentApi::with_students(vec![student(1, "Al", "Math", 70)]);
    api.fail(Op::Get);
    let controller = StudentListController::new(&api);

    let report = finished(controller.submit(&edit_form(1, "Al", "Math", "90")).await);

    assert!(!report.completed);
    assert_eq!(
        report.notices,
        vec![Notice::error("Error fetching original student data")]
    );
    assert!(api.mutations().is_empty());
}

/// Tests a rejected PUT.
///
/// Expected: "Error updating student", no reload
#[tokio::test]
async fn put_failure_is_reported() {
    let api = MockStudentApi::with_students(vec![student(1, "Al", "Math", 70)]);
    api.fail(Op::Update);
    let controller = StudentListController::new(&api);

    let report = finished(controller.submit(&edit_form(1, "Al", "Math", "90")).await);

    assert!(!report.completed);
    assert_eq!(report.notices, vec![Notice::error("Error updating student")]);
    assert!(!api.calls().contains(&Call::List));
}
