//! Catalog line sources.
//!
//! # Responsibility
//! - Provide the narrow "sequence of text lines that can fail to open"
//!   capability the loader consumes.
//! - Keep file-backed and in-memory sources interchangeable so scenario
//!   tests never need a real filesystem.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// A readable source of catalog text lines.
pub trait LineSource {
    /// Human-readable name used in console notices and log events.
    fn label(&self) -> String;

    /// Reads every line up front.
    ///
    /// Any open or read failure aborts the whole read; the loader treats a
    /// partial source as unreadable rather than committing partial data.
    fn read_lines(&self) -> Result<Vec<String>, SourceError>;
}

/// Failure to open or read a catalog source.
#[derive(Debug)]
pub struct SourceError {
    label: String,
    cause: io::Error,
}

impl SourceError {
    pub fn new(label: impl Into<String>, cause: io::Error) -> Self {
        Self {
            label: label.into(),
            cause,
        }
    }

    /// The label of the source that failed.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unable to read course source `{}`: {}",
            self.label, self.cause
        )
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// File-backed catalog source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        let file = File::open(&self.path).map_err(|err| SourceError::new(self.label(), err))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(|err| SourceError::new(self.label(), err))?);
        }
        Ok(lines)
    }
}

/// In-memory catalog source for tests and scripted sessions.
#[derive(Debug, Clone)]
pub struct MemorySource {
    label: String,
    lines: Vec<String>,
}

impl MemorySource {
    /// Creates a source from inline text, one catalog record per line.
    pub fn new(label: impl Into<String>, text: &str) -> Self {
        Self {
            label: label.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.lines.clone())
    }
}
