//! Greedy genre decision tree.
//!
//! The tree partitions a catalog by yes/no genre questions. Each internal
//! node asks "Do you want to watch a {genre} movie?" and splits its movies
//! into that genre and everything else; each leaf holds a group of movies
//! that share one genre.
//!
//! ## Algorithm
//! 1. Empty input has no tree
//! 2. If every movie has the same genre, emit a leaf with all of them
//! 3. Otherwise, try every movie's genre as the split and score it by
//!    `min(|yes|, |no|)`; the first genre with the strictly highest score wins
//! 4. Recurse on both halves

use catalog::Movie;
use tracing::{debug, warn};

/// A node in the recommendation tree.
///
/// A node is a leaf exactly when `movies` is non-empty, and leaves have no
/// children. Children are owned by their parent; nothing points back up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    /// Prompt shown at internal nodes. Leaves carry one too, but it is
    /// descriptive only and never asked.
    pub question: String,
    /// The shared genre of a leaf's movies; empty on internal nodes
    pub genre: String,
    /// Movies at this leaf, in catalog order; empty on internal nodes
    pub movies: Vec<Movie>,
    pub yes_child: Option<Box<DecisionNode>>,
    pub no_child: Option<Box<DecisionNode>>,
}

/// Prompt text for a genre
pub fn question_for(genre: &str) -> String {
    format!("Do you want to watch a {} movie?", genre)
}

impl DecisionNode {
    /// A leaf holding a single-genre group
    pub fn leaf(genre: impl Into<String>, movies: Vec<Movie>) -> Self {
        let genre = genre.into();
        Self {
            question: question_for(&genre),
            genre,
            movies,
            yes_child: None,
            no_child: None,
        }
    }

    /// An internal node asking `question`
    pub fn split(
        question: impl Into<String>,
        yes_child: Option<DecisionNode>,
        no_child: Option<DecisionNode>,
    ) -> Self {
        Self {
            question: question.into(),
            genre: String::new(),
            movies: Vec::new(),
            yes_child: yes_child.map(Box::new),
            no_child: no_child.map(Box::new),
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.movies.is_empty()
    }

    /// Number of edges on the longest path down from this node
    pub fn depth(&self) -> usize {
        let children = [self.yes_child.as_deref(), self.no_child.as_deref()];
        children
            .into_iter()
            .flatten()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Every node in the subtree, parents before children, yes before no
    pub fn nodes(&self) -> Vec<&DecisionNode> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            if let Some(no) = node.no_child.as_deref() {
                stack.push(no);
            }
            if let Some(yes) = node.yes_child.as_deref() {
                stack.push(yes);
            }
        }
        nodes
    }

    /// Leaves of the subtree, left (yes) to right (no)
    pub fn leaves(&self) -> Vec<&DecisionNode> {
        self.nodes().into_iter().filter(|node| node.is_leaf()).collect()
    }
}

/// The chosen partition at an internal node
struct Split<'a> {
    genre: &'a str,
    score: usize,
}

/// Build a decision tree over `movies`.
///
/// Returns `None` for an empty slice. The same input order always produces
/// the same tree.
pub fn build_tree(movies: &[Movie]) -> Option<DecisionNode> {
    let first = movies.first()?;

    if movies.iter().all(|movie| movie.genre == first.genre) {
        debug!("Leaf: {} {} movie(s)", movies.len(), first.genre);
        return Some(DecisionNode::leaf(first.genre.clone(), movies.to_vec()));
    }

    let Some(split) = best_split(movies) else {
        // Unreachable for mixed genres
        warn!(
            "No genre split scored above zero for {} movies, keeping them in one leaf",
            movies.len()
        );
        let mut node = DecisionNode::leaf(String::new(), movies.to_vec());
        node.question = question_for(&first.genre);
        return Some(node);
    };

    let (yes, no): (Vec<Movie>, Vec<Movie>) = movies
        .iter()
        .cloned()
        .partition(|movie| movie.genre == split.genre);

    debug!(
        "Split on {} (score {}): {} yes / {} no",
        split.genre,
        split.score,
        yes.len(),
        no.len()
    );

    Some(DecisionNode::split(
        question_for(split.genre),
        build_tree(&yes),
        build_tree(&no),
    ))
}

/// Find the genre whose yes/no partition is the most balanced.
///
/// Candidates are tried in input order and only a strictly better score
/// replaces the incumbent, so the first genre reaching the maximum wins.
fn best_split(movies: &[Movie]) -> Option<Split<'_>> {
    let mut best: Option<Split<'_>> = None;

    for movie in movies {
        let yes = movies
            .iter()
            .filter(|other| other.genre == movie.genre)
            .count();
        let score = yes.min(movies.len() - yes);

        if score > best.as_ref().map_or(0, |b| b.score) {
            best = Some(Split {
                genre: &movie.genre,
                score,
            });
        }
    }

    best
}
