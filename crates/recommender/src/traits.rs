//! Core traits for driving a recommendation session.
//!
//! The navigator never touches the console. Whoever owns the input side
//! implements [`AnswerSource`] and the session asks it one question at a time.

use crate::navigator::Answer;

/// Supplies yes/no answers to the questions of a decision tree.
///
/// ## Design Note
/// - Called once per internal node visited, in traversal order
/// - Returning `None` means the source has closed and the session is over
pub trait AnswerSource {
    /// Present `question` and collect the answer.
    ///
    /// # Returns
    /// * `Some(Answer)` - The user's answer
    /// * `None` - No more input is available
    fn answer(&mut self, question: &str) -> Option<Answer>;
}
