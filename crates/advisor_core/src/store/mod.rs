//! In-memory course storage.
//!
//! # Responsibility
//! - Own the identifier-keyed course map for the running session.
//!
//! # Invariants
//! - At most one course exists per identifier.
//! - Contents only change through `replace_all` and `clear`.

pub mod course_store;
