//! Error types for catalog loading and day parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a course catalog. Any of them fails the whole load.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or has the wrong shape
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level document has no `courses` array
    #[error("Catalog has no 'courses' array")]
    MissingCourses,

    /// A course record lacks a required field
    #[error("Malformed course record #{index}: missing field '{field}'")]
    MalformedCourseRecord {
        /// Position of the record in the catalog
        index: usize,
        /// Dotted path of the missing field (e.g. `labs[0].time`)
        field: String,
    },

    /// A time slot names a day that is not one of Monday..Sunday
    #[error("Course record #{index}: unknown day '{value}'")]
    InvalidDay {
        /// Position of the record in the catalog
        index: usize,
        /// The offending day string
        value: String,
    },
}

/// A day string that is neither a full weekday name nor its 3-letter abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown day: '{0}'")]
pub struct UnknownDay(pub String);
