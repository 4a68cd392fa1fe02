//! Error types for a recommendation session.
//!
//! None of these are fatal to the program: each one ends the current
//! session and the caller goes back to whatever it was doing.

use thiserror::Error;

/// Why a recommendation session ended without a result
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendError {
    /// The tree was built from an empty catalog, so there is no root
    #[error("no movies in the catalog")]
    EmptyCatalog,

    /// Traversal followed an answer into a missing child
    #[error("no recommendation available")]
    DeadEnd,

    /// The answer source stopped before a leaf was reached
    #[error("recommendation cancelled")]
    InputClosed,
}

/// Convenience alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
