//! Genre decision-tree recommendations for the cinema console.
//!
//! This crate provides:
//! - `build_tree`, a greedy builder that splits a catalog by genre questions
//! - `Navigator`, a state machine that walks the tree one answer at a time
//! - `AnswerSource` and `recommend` for running a whole session
//!
//! ## Architecture
//! A session goes through three stages:
//! 1. Build a fresh tree from the catalog snapshot
//! 2. Ask the question at each internal node until a leaf is reached
//! 3. Hand back the leaf's movies and drop the tree
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use recommender::{recommend, ScriptedAnswers};
//!
//! let catalog = Catalog::demo();
//! let mut answers = ScriptedAnswers::from_chars("ny");
//!
//! for movie in recommend(catalog.movies(), &mut answers)? {
//!     println!("{movie}");
//! }
//! ```

pub mod error;
pub mod traits;
pub mod tree;
pub mod navigator;
pub mod session;

// Re-export main types
pub use error::{RecommendError, Result};
pub use navigator::{Answer, Navigator, NavigatorState};
pub use session::{recommend, ScriptedAnswers};
pub use traits::AnswerSource;
pub use tree::{build_tree, question_for, DecisionNode};
