use advisor_core::{
    load_catalog, normalize_identifier, CourseStore, MemorySource, QueryError, QueryService,
};

fn loaded_store() -> CourseStore {
    let source = MemorySource::new(
        "inline catalog",
        "MATH201,Applied Mathematics,CS100\n\
         CS300,Intro to Foo,CS100,CS200\n\
         CS100,Foundations\n\
         BIO150,Cell Biology\n",
    );
    let mut store = CourseStore::new();
    load_catalog(&source, &mut store).unwrap();
    store
}

#[test]
fn queries_on_a_fresh_store_report_not_loaded() {
    let store = CourseStore::new();
    let service = QueryService::new(&store);

    assert_eq!(service.sorted_courses().unwrap_err(), QueryError::NotLoaded);
    assert_eq!(
        service.course_details("CS300").unwrap_err(),
        QueryError::NotLoaded
    );
}

#[test]
fn sorted_listing_covers_every_course_exactly_once_in_order() {
    let store = loaded_store();

    let listed = QueryService::new(&store).sorted_courses().unwrap();
    let identifiers: Vec<&str> = listed.iter().map(|c| c.identifier.as_str()).collect();

    assert_eq!(identifiers, vec!["BIO150", "CS100", "CS300", "MATH201"]);
}

#[test]
fn listing_an_empty_loaded_catalog_is_not_an_error() {
    let mut store = CourseStore::new();
    store.replace_all(Vec::new());

    let listed = QueryService::new(&store).sorted_courses().unwrap();
    assert!(listed.is_empty());
}

#[test]
fn detail_lookup_normalizes_case_and_whitespace() {
    let store = loaded_store();
    let service = QueryService::new(&store);

    for raw in ["CS300", "cs300", " Cs300 ", "\tCS300\n"] {
        let course = service.course_details(raw).unwrap();
        assert_eq!(course.identifier, "CS300");
        assert_eq!(course.title, "Intro to Foo");
        assert_eq!(course.prerequisites, vec!["CS100", "CS200"]);
    }
}

#[test]
fn missing_course_reports_not_found_with_normalized_identifier() {
    let store = loaded_store();

    let err = QueryService::new(&store)
        .course_details(" cs999 ")
        .unwrap_err();

    assert_eq!(err, QueryError::NotFound("CS999".to_string()));
}

#[test]
fn not_found_is_distinct_from_not_loaded() {
    let loaded = loaded_store();
    let fresh = CourseStore::new();

    let miss = QueryService::new(&loaded)
        .course_details("CS999")
        .unwrap_err();
    let unloaded = QueryService::new(&fresh)
        .course_details("CS999")
        .unwrap_err();

    assert_ne!(miss, unloaded);
}

#[test]
fn lowercase_stored_identifier_stays_unreachable_by_lookup() {
    let source = MemorySource::new("inline catalog", "cs450,Lowercase Entry\n");
    let mut store = CourseStore::new();
    load_catalog(&source, &mut store).unwrap();
    let service = QueryService::new(&store);

    // The listing shows the identifier as read from the source.
    let listed = service.sorted_courses().unwrap();
    assert_eq!(listed[0].identifier, "cs450");

    // Lookups uppercase the query first, so they can never hit it.
    assert_eq!(
        service.course_details("cs450").unwrap_err(),
        QueryError::NotFound("CS450".to_string())
    );
}

#[test]
fn normalize_identifier_trims_and_uppercases_ascii() {
    assert_eq!(normalize_identifier("  cs300 \t"), "CS300");
    assert_eq!(normalize_identifier("math-201"), "MATH-201");
    assert_eq!(normalize_identifier("CS300"), "CS300");
    assert_eq!(normalize_identifier("   "), "");
}
