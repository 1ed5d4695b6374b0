//! Read-only query use-cases over the course store.
//!
//! # Responsibility
//! - Provide the sorted-listing and detail-lookup operations the session
//!   loop dispatches to.
//!
//! # Invariants
//! - Queries never mutate the store.
//! - An unloaded store is a typed error, not a panic or an empty result.

pub mod query_service;
