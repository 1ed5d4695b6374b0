//! Catalog query use-cases.
//!
//! # Responsibility
//! - Sorted listing of the whole catalog.
//! - Single-course detail lookup with query normalization.
//!
//! # Invariants
//! - Listing order is plain byte-lexicographic on the identifier, each
//!   stored course exactly once.
//! - Lookup normalizes the query (trim + ASCII uppercase) but never the
//!   stored identifiers.

use crate::model::course::Course;
use crate::store::course_store::CourseStore;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Query-layer error; the session layer owns the user-facing wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No successful load has happened yet.
    NotLoaded,
    /// The (normalized) identifier is absent from a loaded store.
    NotFound(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded => write!(f, "no course data loaded"),
            Self::NotFound(identifier) => write!(f, "course not found: {identifier}"),
        }
    }
}

impl Error for QueryError {}

/// Normalizes a user-supplied course identifier for lookup.
///
/// Trims surrounding whitespace and ASCII-uppercases the rest; stored
/// identifiers are never normalized, so a lowercase identifier in the
/// source stays unreachable by lookup.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Read-only query facade over a course store.
pub struct QueryService<'a> {
    store: &'a CourseStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a CourseStore) -> Self {
        Self { store }
    }

    /// Returns every stored course sorted by identifier.
    ///
    /// # Errors
    /// - `NotLoaded` when no successful load has happened yet.
    pub fn sorted_courses(&self) -> Result<Vec<&'a Course>, QueryError> {
        if !self.store.is_loaded() {
            return Err(QueryError::NotLoaded);
        }

        let mut courses: Vec<&Course> = self.store.courses().collect();
        courses.sort_unstable_by(|a, b| a.identifier.cmp(&b.identifier));
        debug!(
            "event=catalog_list module=query status=ok count={}",
            courses.len()
        );
        Ok(courses)
    }

    /// Looks up one course by a raw user-supplied identifier.
    ///
    /// # Errors
    /// - `NotLoaded` when no successful load has happened yet.
    /// - `NotFound` (carrying the normalized identifier) when the course is
    ///   absent.
    pub fn course_details(&self, raw_identifier: &str) -> Result<&'a Course, QueryError> {
        if !self.store.is_loaded() {
            return Err(QueryError::NotLoaded);
        }

        let wanted = normalize_identifier(raw_identifier);
        match self.store.get(&wanted) {
            Some(course) => {
                debug!("event=course_detail module=query status=ok identifier={wanted}");
                Ok(course)
            }
            None => {
                debug!("event=course_detail module=query status=not_found identifier={wanted}");
                Err(QueryError::NotFound(wanted))
            }
        }
    }
}
