//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file or directory could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog document is not valid JSON or does not match the record shape
    ///
    /// `line` and `column` come straight from serde_json and are 1-based.
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    Parse {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// Two postings share the same id
    #[error("Duplicate internship id: {0}")]
    DuplicateId(String),

    /// A record field had a value the catalog refuses to ingest
    #[error("Invalid value for {field} in {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
