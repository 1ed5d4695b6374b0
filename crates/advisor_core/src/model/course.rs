//! Course domain model.
//!
//! # Responsibility
//! - Define the value record produced by the record builder and held by the
//!   course store.
//!
//! # Invariants
//! - `identifier` and `title` are never empty once a record exists (blank
//!   fields are rejected before construction).
//! - `prerequisites` never contains empty strings; source order and
//!   duplicates are preserved exactly as read.

use serde::{Deserialize, Serialize};

/// One academic course as read from the catalog source.
///
/// Prerequisites are stored as plain identifiers and are never resolved
/// against the catalog; a reference to an unknown course is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique key within the store, kept in its as-read case.
    pub identifier: String,
    /// Human-readable course title.
    pub title: String,
    /// Prerequisite identifiers in source order.
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Creates a course record from already-validated parts.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            prerequisites,
        }
    }

    /// Returns whether this course lists any prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
