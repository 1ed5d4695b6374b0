//! Catalog loading: line sources and the load orchestration.
//!
//! # Responsibility
//! - Abstract where catalog lines come from behind `LineSource`.
//! - Turn a full read of one source into a single store replacement.
//!
//! # Invariants
//! - The store is committed exactly once per load, after the whole source
//!   has been read; a failed read leaves previous contents untouched.

pub mod loader;
pub mod source;
