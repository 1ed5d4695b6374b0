use advisor_core::Course;

#[test]
fn new_keeps_parts_as_given() {
    let course = Course::new(
        "CS300",
        "Intro to Foo",
        vec!["CS100".to_string(), "CS200".to_string()],
    );

    assert_eq!(course.identifier, "CS300");
    assert_eq!(course.title, "Intro to Foo");
    assert_eq!(course.prerequisites, vec!["CS100", "CS200"]);
    assert!(course.has_prerequisites());
}

#[test]
fn course_without_prerequisites_reports_none() {
    let course = Course::new("CS100", "Foundations", Vec::new());
    assert!(!course.has_prerequisites());
}

#[test]
fn course_serialization_uses_expected_wire_fields() {
    let course = Course::new("CS300", "Intro to Foo", vec!["CS100".to_string()]);

    let json = serde_json::to_value(&course).unwrap();
    assert_eq!(json["identifier"], "CS300");
    assert_eq!(json["title"], "Intro to Foo");
    assert_eq!(json["prerequisites"], serde_json::json!(["CS100"]));

    let decoded: Course = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, course);
}
