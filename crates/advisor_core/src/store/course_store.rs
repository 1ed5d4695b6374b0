//! Identifier-keyed course store.
//!
//! # Responsibility
//! - Hold every loaded course keyed by its identifier.
//! - Track whether at least one successful load has happened.
//!
//! # Invariants
//! - `replace_all` is the only way contents appear; old contents are
//!   discarded, never merged.
//! - Lookups are exact-match; callers normalize before calling.
//! - No ordering is guaranteed; the query layer imposes display order.

use crate::model::course::Course;
use std::collections::HashMap;

/// The in-memory mapping from course identifier to course record.
///
/// Starts empty and unloaded; queries consult `is_loaded` to distinguish
/// "never loaded" from "loaded an empty catalog".
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: HashMap<String, Course>,
    loaded: bool,
}

impl CourseStore {
    /// Creates an empty, unloaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire contents with `courses` and marks the store
    /// loaded.
    ///
    /// # Contract
    /// - Existing contents are cleared first, never merged.
    /// - Courses are inserted in sequence order; a later course with the
    ///   same identifier silently overwrites the earlier one.
    pub fn replace_all(&mut self, courses: Vec<Course>) {
        self.courses.clear();
        for course in courses {
            self.courses.insert(course.identifier.clone(), course);
        }
        self.loaded = true;
    }

    /// Exact-match lookup by identifier; no case normalization happens here.
    pub fn get(&self, identifier: &str) -> Option<&Course> {
        self.courses.get(identifier)
    }

    /// Returns every stored identifier in no particular order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.courses.keys().map(String::as_str).collect()
    }

    /// Iterates all stored courses in no particular order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Whether at least one successful load has happened.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of stored courses (distinct identifiers).
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the store currently holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Empties the store and resets the loaded flag.
    ///
    /// Exposed for completeness and tests; the default session never calls
    /// this.
    pub fn clear(&mut self) {
        self.courses.clear();
        self.loaded = false;
    }
}
