//! Catalog load orchestration.
//!
//! # Responsibility
//! - Read one line source in full, parse every record, and commit the
//!   result into the course store in a single replacement.
//! - Report skipped lines so the caller can surface per-line warnings.
//!
//! # Invariants
//! - Blank (all-whitespace) lines are filtered before tokenization and are
//!   never reported as skipped.
//! - Individual malformed lines never abort a load; an unreadable source
//!   aborts before the store is touched.

use crate::catalog::source::{LineSource, SourceError};
use crate::parse::record::{build_course, split_fields, RecordError};
use crate::store::course_store::CourseStore;
use log::{error, info, warn};
use std::time::Instant;

/// Field delimiter of the catalog format.
pub const FIELD_DELIMITER: char = ',';

/// One source line that could not become a course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the source.
    pub line_number: usize,
    pub reason: RecordError,
}

/// Outcome of one successful catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Courses in the store after replacement (distinct identifiers, so
    /// duplicate-identifier lines count once).
    pub loaded: usize,
    /// Malformed lines skipped during the read, in source order.
    pub skipped: Vec<SkippedLine>,
}

/// Loads every record from `source` and replaces the store contents.
///
/// # Contract
/// - The store is replaced exactly once, after the whole source has been
///   read; a read failure returns the error with the store unchanged.
/// - Later records with a duplicate identifier overwrite earlier ones.
///
/// # Errors
/// - `SourceError` when the source cannot be opened or read.
pub fn load_catalog<S: LineSource>(
    source: &S,
    store: &mut CourseStore,
) -> Result<LoadReport, SourceError> {
    let started_at = Instant::now();
    info!(
        "event=catalog_load module=catalog status=start source={}",
        source.label()
    );

    let lines = match source.read_lines() {
        Ok(lines) => lines,
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error source={} duration_ms={} error={}",
                source.label(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    let mut courses = Vec::new();
    let mut skipped = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(line, FIELD_DELIMITER);
        match build_course(&fields) {
            Ok(course) => courses.push(course),
            Err(reason) => {
                warn!(
                    "event=catalog_line_skipped module=catalog line={line_number} reason={reason}"
                );
                skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    store.replace_all(courses);
    let loaded = store.len();
    info!(
        "event=catalog_load module=catalog status=ok source={} duration_ms={} loaded={} skipped={}",
        source.label(),
        started_at.elapsed().as_millis(),
        loaded,
        skipped.len()
    );

    Ok(LoadReport { loaded, skipped })
}
