//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical course record shared by the load and query paths.
//!
//! # Invariants
//! - Every course is keyed by its as-read `identifier` string.
//! - Prerequisite references are plain identifiers with no existence check.

pub mod course;
