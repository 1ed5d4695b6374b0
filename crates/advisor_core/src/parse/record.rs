//! Field tokenizer and course record builder.
//!
//! # Responsibility
//! - Turn one raw line into trimmed field tokens.
//! - Validate the minimum record shape and produce a `Course`.
//!
//! # Invariants
//! - Empty segments between delimiters are preserved by the tokenizer;
//!   whether they matter is decided per field by the builder.
//! - A built record always has a non-empty identifier and title.

use crate::model::course::Course;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a source line could not become a course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than the required identifier + title pair.
    TooFewFields { found: usize },
    /// The identifier field is blank after trimming.
    EmptyIdentifier,
    /// The title field is blank after trimming.
    EmptyTitle,
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields { found } => {
                write!(
                    f,
                    "record needs at least an identifier and a title, found {found} field(s)"
                )
            }
            Self::EmptyIdentifier => write!(f, "record identifier is empty"),
            Self::EmptyTitle => write!(f, "record title is empty"),
        }
    }
}

impl Error for RecordError {}

/// Splits one raw line into trimmed field tokens.
///
/// Empty segments yield empty-string tokens rather than being dropped, so a
/// line with no delimiter always yields exactly one token.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Builds one course record from a token sequence.
///
/// # Contract
/// - `fields[0]` is the identifier, `fields[1]` the title; both must be
///   non-empty.
/// - `fields[2..]` are prerequisite candidates; blank candidates are dropped,
///   the rest keep their order (duplicates included).
///
/// # Errors
/// - `TooFewFields` when the identifier + title pair is missing.
/// - `EmptyIdentifier` / `EmptyTitle` when the respective field is blank.
pub fn build_course(fields: &[String]) -> Result<Course, RecordError> {
    if fields.len() < 2 {
        return Err(RecordError::TooFewFields {
            found: fields.len(),
        });
    }
    if fields[0].is_empty() {
        return Err(RecordError::EmptyIdentifier);
    }
    if fields[1].is_empty() {
        return Err(RecordError::EmptyTitle);
    }

    let prerequisites = fields[2..]
        .iter()
        .filter(|field| !field.is_empty())
        .cloned()
        .collect();

    Ok(Course::new(
        fields[0].clone(),
        fields[1].clone(),
        prerequisites,
    ))
}
