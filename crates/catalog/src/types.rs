//! Core domain types for the cinema catalog.
//!
//! Key Rust concepts demonstrated here:
//! - Structs with public fields for plain records
//! - Derive macros for common traits
//! - Implementing `Display` for a user-facing rendering

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Movie
// =============================================================================

/// A movie that can be searched, booked and recommended.
///
/// Movies are owned by the [`Catalog`]; everything else borrows them or
/// clones the few it needs to hand back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique within a catalog
    pub title: String,
    pub genre: String,
    /// Running time in minutes
    pub duration: u32,
    /// Age rating, e.g. "PG-13"
    pub classification: String,
    /// Screening times in the order they are offered
    pub showtimes: Vec<String>,
}

impl Movie {
    /// Create a movie from borrowed string data
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        duration: u32,
        classification: impl Into<String>,
        showtimes: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            duration,
            classification: classification.into(),
            showtimes: showtimes.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Look up a showtime by its 1-based position, as shown to the user
    pub fn showtime(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.showtimes.get(idx))
            .map(String::as_str)
    }
}

/// Renders as `title (genre)`, the format used for recommendations
impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.genre)
    }
}

// =============================================================================
// Catalog - The In-Memory Movie List
// =============================================================================

/// Ordered collection of movies with unique titles.
///
/// The order movies were added in is preserved and is significant: search
/// results and the recommendation tree both follow it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// All movies, in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Find a movie by its exact title
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.title == title)
    }
}
