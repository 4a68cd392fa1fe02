//! Step-by-step traversal of a decision tree.
//!
//! [`Navigator`] is a small state machine: it exposes the question at the
//! current node and moves down one level per [`Navigator::advance`]. It
//! performs no I/O, so any front end can drive it.

use crate::error::RecommendError;
use crate::tree::DecisionNode;
use catalog::Movie;
use tracing::debug;

/// A yes/no answer to a tree question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Interpret raw user input.
    ///
    /// Only a leading `y` counts as yes. Anything else, including empty
    /// input and `Y`, is treated as no rather than rejected.
    pub fn from_input(input: &str) -> Self {
        if input.trim_start().starts_with('y') {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl From<bool> for Answer {
    fn from(yes: bool) -> Self {
        if yes { Answer::Yes } else { Answer::No }
    }
}

/// Where a navigation currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorState<'a> {
    /// Waiting for an answer to this question
    InProgress(&'a str),
    /// Reached a leaf; these are the recommended movies
    Done(&'a [Movie]),
    Failed(RecommendError),
}

#[derive(Debug, Clone, Copy)]
enum Position<'a> {
    At(&'a DecisionNode),
    Failed(RecommendError),
}

/// Walks a borrowed tree from the root to a leaf.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    position: Position<'a>,
    steps: usize,
}

impl<'a> Navigator<'a> {
    /// Start at `root`. A missing root means the catalog was empty.
    pub fn new(root: Option<&'a DecisionNode>) -> Self {
        let position = match root {
            Some(node) => Position::At(node),
            None => Position::Failed(RecommendError::EmptyCatalog),
        };
        Self { position, steps: 0 }
    }

    pub fn state(&self) -> NavigatorState<'a> {
        match self.position {
            // A leaf is recognised by its movies, never by asking its question
            Position::At(node) if node.movies.is_empty() => {
                NavigatorState::InProgress(node.question.as_str())
            }
            Position::At(node) => NavigatorState::Done(node.movies.as_slice()),
            Position::Failed(err) => NavigatorState::Failed(err),
        }
    }

    /// The question to ask next, if the navigation is still in progress
    pub fn current_question(&self) -> Option<&'a str> {
        match self.state() {
            NavigatorState::InProgress(question) => Some(question),
            _ => None,
        }
    }

    /// Number of answers applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Apply an answer and move to the matching child.
    ///
    /// Has no effect once the navigation is done or has failed.
    pub fn advance(&mut self, answer: Answer) -> NavigatorState<'a> {
        if let Position::At(node) = self.position {
            if node.movies.is_empty() {
                let child = match answer {
                    Answer::Yes => node.yes_child.as_deref(),
                    Answer::No => node.no_child.as_deref(),
                };

                debug!("{} -> {:?}", node.question, answer);
                self.steps += 1;
                self.position = match child {
                    Some(next) => Position::At(next),
                    None => Position::Failed(RecommendError::DeadEnd),
                };
            }
        }
        self.state()
    }
}
