//! Parser for catalog files.
//!
//! One movie per line:
//!
//! ```text
//! title::genre::duration::classification::showtime1|showtime2
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Title, genre and
//! classification must be non-empty. The showtimes field may be empty but
//! must be present.
//!
//! Rust concepts you'll see here:
//! - String parsing and splitting
//! - Error handling with the `?` operator and `map_err`
//! - Converting between types (parsing strings to numbers)

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const FIELD_SEPARATOR: &str = "::";
const SHOWTIME_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 5;

/// Read and parse a catalog file
pub fn parse_catalog(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_catalog_str(&content, &file)
}

/// Parse catalog lines from an in-memory string
///
/// `file` is only used to label parse errors.
pub fn parse_catalog_str(content: &str, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        movies.push(parse_movie_line(line_trimmed, file, line_no)?);
    }

    Ok(movies)
}

fn parse_movie_line(line: &str, file: &str, line_no: usize) -> Result<Movie> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let title = parts[0];
    if title.is_empty() {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing title".to_string(),
        });
    }

    let genre = parts[1];
    if genre.is_empty() {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing genre".to_string(),
        });
    }

    let duration = parts[2].parse().map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid duration: {}", e),
    })?;

    let classification = parts[3];
    if classification.is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "classification".to_string(),
            value: classification.to_string(),
        });
    }

    Ok(Movie {
        title: title.to_string(),
        genre: genre.to_string(),
        duration,
        classification: classification.to_string(),
        showtimes: parse_showtimes(parts[4]),
    })
}

/// Split pipe-separated showtimes
///
/// Example: "9:00 AM|12:00 PM" -> vec!["9:00 AM", "12:00 PM"]
fn parse_showtimes(s: &str) -> Vec<String> {
    s.split(SHOWTIME_SEPARATOR)
        .map(str::trim)
        .filter(|showtime| !showtime.is_empty())
        .map(str::to_string)
        .collect()
}
