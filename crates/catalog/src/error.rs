//! Error types for the catalog crate.
//!
//! Every failure while reading or validating a movie catalog ends up as a
//! `CatalogError`. The `#[derive(Error)]` macro from thiserror gives us
//! `Display` and `std::error::Error` from the `#[error(...)]` attributes.

use thiserror::Error;

/// Errors that can occur while loading or building a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two movies in the same catalog share a title
    #[error("Duplicate movie title: {0}")]
    DuplicateTitle(String),
}

/// Convenience alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
