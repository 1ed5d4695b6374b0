//! Core domain logic for the Advisor course planner.
//! This crate is the single source of truth for catalog invariants.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod parse;
pub mod service;
pub mod session;
pub mod store;

pub use catalog::loader::{load_catalog, LoadReport, SkippedLine, FIELD_DELIMITER};
pub use catalog::source::{FileSource, LineSource, MemorySource, SourceError};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging};
pub use model::course::Course;
pub use parse::record::{build_course, split_fields, RecordError};
pub use service::query_service::{normalize_identifier, QueryError, QueryService};
pub use session::{Session, SessionState};
pub use store::course_store::CourseStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
