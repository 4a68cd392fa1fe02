//! One recommendation session, start to finish.
//!
//! A session builds a fresh tree from the catalog snapshot it is given,
//! walks it with answers from an [`AnswerSource`], and drops the tree when
//! it returns.

use crate::error::{RecommendError, Result};
use crate::navigator::{Answer, Navigator, NavigatorState};
use crate::traits::AnswerSource;
use crate::tree::build_tree;
use catalog::Movie;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Run a full session over `movies` and return the movies at the leaf reached.
///
/// # Errors
/// * `EmptyCatalog` - `movies` is empty
/// * `DeadEnd` - an answer led to a missing branch
/// * `InputClosed` - `source` ran out of answers first
pub fn recommend<S>(movies: &[Movie], source: &mut S) -> Result<Vec<Movie>>
where
    S: AnswerSource + ?Sized,
{
    let tree = build_tree(movies);
    if let Some(root) = &tree {
        debug!("Built decision tree of depth {}", root.depth());
    }

    let mut navigator = Navigator::new(tree.as_ref());
    loop {
        match navigator.state() {
            NavigatorState::InProgress(question) => {
                let answer = source.answer(question).ok_or(RecommendError::InputClosed)?;
                navigator.advance(answer);
            }
            NavigatorState::Done(found) => {
                info!(
                    "Recommended {} movie(s) after {} question(s)",
                    found.len(),
                    navigator.steps()
                );
                return Ok(found.to_vec());
            }
            NavigatorState::Failed(err) => return Err(err),
        }
    }
}

/// Answers taken from a fixed list of raw inputs.
///
/// Each input goes through [`Answer::from_input`], so anything that is not
/// a `y` is a no. The questions that were asked are kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    inputs: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// One answer per non-whitespace character, e.g. `"yn"` or `"y n"`
    pub fn from_chars(script: &str) -> Self {
        Self::new(
            script
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from),
        )
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Inputs not consumed yet
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(&mut self, question: &str) -> Option<Answer> {
        self.asked.push(question.to_string());
        self.inputs.pop_front().map(|input| Answer::from_input(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("M1", "Action", 120, "PG-13", &["9:00 AM"]),
            Movie::new("M2", "Comedy", 110, "PG", &["10:00 AM"]),
            Movie::new("M3", "Drama", 130, "R", &["11:00 AM"]),
        ]
    }

    #[test]
    fn test_from_chars_skips_whitespace() {
        let script = ScriptedAnswers::from_chars(" y n\tx ");
        assert_eq!(script.remaining(), 3);
    }

    #[test]
    fn test_recommend_yes_at_root() {
        let mut answers = ScriptedAnswers::from_chars("y");
        let movies = recommend(&catalog(), &mut answers).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "M1");
        assert_eq!(answers.asked(), ["Do you want to watch a Action movie?"]);
    }

    #[test]
    fn test_recommend_leftover_answers_are_ignored() {
        let mut answers = ScriptedAnswers::from_chars("nyyy");
        let movies = recommend(&catalog(), &mut answers).unwrap();

        assert_eq!(movies[0].title, "M2");
        assert_eq!(answers.remaining(), 2);
    }

    #[test]
    fn test_recommend_input_closed() {
        let mut answers = ScriptedAnswers::from_chars("n");
        let err = recommend(&catalog(), &mut answers).unwrap_err();

        assert_eq!(err, RecommendError::InputClosed);
        assert_eq!(err.to_string(), "recommendation cancelled");
        assert_eq!(answers.asked().len(), 2);
    }

    #[test]
    fn test_recommend_empty_catalog() {
        let mut answers = ScriptedAnswers::default();
        let err = recommend(&[], &mut answers).unwrap_err();

        assert_eq!(err, RecommendError::EmptyCatalog);
        assert!(answers.asked().is_empty());
    }

    #[test]
    fn test_single_genre_catalog_asks_nothing() {
        let movies = vec![
            Movie::new("M1", "Drama", 120, "R", &[]),
            Movie::new("M2", "Drama", 95, "PG", &[]),
        ];
        let mut answers = ScriptedAnswers::default();

        let found = recommend(&movies, &mut answers).unwrap();
        assert_eq!(found, movies);
        assert!(answers.asked().is_empty());
    }
}
