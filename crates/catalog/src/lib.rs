//! # Catalog Crate
//!
//! This crate holds the cinema's movie list.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **parser**: Parse catalog files into Rust structs
//! - **index**: Catalog construction, validation and search
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.dat"))?;
//!
//! for movie in catalog.search("Action") {
//!     println!("{movie}");
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie};
