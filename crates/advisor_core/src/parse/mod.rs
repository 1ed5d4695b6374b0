//! Line parsing for the delimited catalog format.
//!
//! # Responsibility
//! - Split raw source lines into trimmed field tokens.
//! - Build validated course records from token sequences.
//!
//! # Invariants
//! - Tokenization never fails; validation failures are typed `RecordError`s.
//! - Line numbers are a loader concern; this layer sees one line at a time.

pub mod record;
