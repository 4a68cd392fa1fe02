//! Catalog building, validation and search.
//!
//! Rust concepts you'll see here:
//! - Returning `Result<Self>` from constructors that validate input
//! - HashSet for duplicate detection
//! - Rayon's order-preserving parallel iterators

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Build a catalog from a list of movies, keeping their order
    ///
    /// Fails if two movies share a title.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let catalog = Self { movies };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The three movies the console demo ships with
    pub fn demo() -> Self {
        Self {
            movies: vec![
                Movie::new("Movie 1", "Action", 120, "PG-13", &["9:00 AM", "12:00 PM"]),
                Movie::new("Movie 2", "Comedy", 110, "PG", &["10:00 AM", "1:00 PM"]),
                Movie::new("Movie 3", "Drama", 130, "R", &["11:00 AM", "2:00 PM"]),
            ],
        }
    }

    /// Load and validate a catalog file
    ///
    /// See [`parser`] for the line format.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());

        let movies = parser::parse_catalog(path)?;
        let catalog = Self::from_movies(movies)?;

        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }

    /// Movies whose title, genre or classification contains `query`
    ///
    /// Matching is case-sensitive and results keep catalog order.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let matches: Vec<&Movie> = self
            .movies
            .par_iter()
            .filter(|movie| {
                movie.title.contains(query)
                    || movie.genre.contains(query)
                    || movie.classification.contains(query)
            })
            .collect();

        debug!("Search for {:?} matched {} movies", query, matches.len());
        matches
    }

    /// Check that every title is unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for movie in &self.movies {
            if !seen.insert(movie.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(movie.title.clone()));
            }
        }
        Ok(())
    }
}
