//! Integration tests for the recommender.
//!
//! These tests check structural properties of built trees and walk them
//! end to end the way the console does.

use catalog::{Catalog, Movie};
use recommender::{
    build_tree, recommend, Answer, DecisionNode, Navigator, NavigatorState, RecommendError,
    ScriptedAnswers,
};
use std::collections::HashMap;
use std::path::Path;

fn movie(title: &str, genre: &str) -> Movie {
    Movie::new(title, genre, 100, "PG", &["7:00 PM"])
}

fn mixed_catalog() -> Vec<Movie> {
    vec![
        movie("Heat", "Action"),
        movie("Airplane!", "Comedy"),
        movie("Alien", "Horror"),
        movie("Die Hard", "Action"),
        movie("Casablanca", "Drama"),
        movie("Ghostbusters", "Comedy"),
        movie("The Thing", "Horror"),
        movie("Speed", "Action"),
        movie("Amelie", "Romance"),
        movie("Up", "Animation"),
    ]
}

fn title_counts<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for movie in movies {
        *counts.entry(movie.title.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Every answer sequence of length `len`, as y/n strings
fn all_answer_scripts(len: usize) -> Vec<String> {
    (0..1u32 << len)
        .map(|bits| {
            (0..len)
                .map(|i| if bits & (1 << i) != 0 { 'y' } else { 'n' })
                .collect()
        })
        .collect()
}

#[test]
fn test_leaf_iff_movies_iff_no_children() {
    let tree = build_tree(&mixed_catalog()).unwrap();

    for node in tree.nodes() {
        let childless = node.yes_child.is_none() && node.no_child.is_none();
        assert_eq!(node.is_leaf(), childless, "node {:?}", node.question);
        if node.is_leaf() {
            assert!(!node.genre.is_empty());
            assert!(node.movies.iter().all(|m| m.genre == node.genre));
        } else {
            assert!(node.genre.is_empty());
            assert!(node.yes_child.is_some() && node.no_child.is_some());
        }
    }
}

#[test]
fn test_leaves_cover_input_exactly_once() {
    let movies = mixed_catalog();
    let tree = build_tree(&movies).unwrap();

    let leaf_movies: Vec<&Movie> = tree
        .leaves()
        .into_iter()
        .flat_map(|leaf| leaf.movies.iter())
        .collect();

    assert_eq!(leaf_movies.len(), movies.len());
    assert_eq!(title_counts(leaf_movies), title_counts(&movies));
}

#[test]
fn test_build_is_deterministic() {
    let movies = mixed_catalog();
    assert_eq!(build_tree(&movies), build_tree(&movies));
}

#[test]
fn test_root_split_maximises_balance() {
    let movies = vec![
        movie("a1", "A"),
        movie("a2", "A"),
        movie("b1", "B"),
        movie("b2", "B"),
        movie("b3", "B"),
        movie("c1", "C"),
    ];
    let tree = build_tree(&movies).unwrap();

    assert_eq!(tree.question, "Do you want to watch a B movie?");
    assert_eq!(tree.yes_child.as_deref().map(|n| n.genre.as_str()), Some("B"));
}

#[test]
fn test_every_answer_sequence_terminates_within_depth() {
    let movies = mixed_catalog();
    let tree = build_tree(&movies).unwrap();
    let depth = tree.depth();

    for script in all_answer_scripts(depth) {
        let mut navigator = Navigator::new(Some(&tree));
        let mut answers = script.chars();

        while navigator.current_question().is_some() {
            let raw = answers.next().expect("tree deeper than its depth");
            navigator.advance(Answer::from_input(&raw.to_string()));
        }

        assert!(navigator.steps() <= depth);
        match navigator.state() {
            NavigatorState::Done(found) => assert!(!found.is_empty()),
            other => panic!("script {script} ended in {other:?}"),
        }
    }
}

#[test]
fn test_end_to_end_three_distinct_genres() {
    let catalog = Catalog::demo();

    let cases = [("y", "Movie 1"), ("ny", "Movie 2"), ("nn", "Movie 3")];
    for (script, expected) in cases {
        let mut answers = ScriptedAnswers::from_chars(script);
        let found = recommend(catalog.movies(), &mut answers).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, expected);
        assert_eq!(found[0].to_string(), format!("{} ({})", expected, found[0].genre));
        assert_eq!(answers.asked()[0], "Do you want to watch a Action movie?");
    }
}

#[test]
fn test_invalid_answers_count_as_no() {
    let catalog = Catalog::demo();
    let mut answers = ScriptedAnswers::new(["maybe", "Y"]);

    let found = recommend(catalog.movies(), &mut answers).unwrap();
    assert_eq!(found[0].title, "Movie 3");
}

#[test]
fn test_leaf_questions_are_never_asked() {
    let movies = mixed_catalog();
    let tree = build_tree(&movies).unwrap();
    let internal_questions: Vec<&str> = tree
        .nodes()
        .into_iter()
        .filter(|node| !node.is_leaf())
        .map(|node| node.question.as_str())
        .collect();

    for script in all_answer_scripts(tree.depth()) {
        let mut answers = ScriptedAnswers::from_chars(&script);
        recommend(&movies, &mut answers).unwrap();

        for asked in answers.asked() {
            assert!(
                internal_questions.contains(&asked.as_str()),
                "{asked} is not an internal question"
            );
        }
    }
}

#[test]
fn test_dead_end_is_reported() {
    let tree = DecisionNode::split("Do you want to watch a Western movie?", None, None);
    let mut navigator = Navigator::new(Some(&tree));

    assert_eq!(
        navigator.advance(Answer::Yes),
        NavigatorState::Failed(RecommendError::DeadEnd)
    );
    assert_eq!(RecommendError::DeadEnd.to_string(), "no recommendation available");
}

#[test]
fn test_bundled_catalog_session() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/movies.dat");
    assert!(path.exists(), "missing {}", path.display());

    let catalog = Catalog::load_from_file(&path).unwrap();
    let mut answers = ScriptedAnswers::from_chars("yyyyyyyy");

    let found = recommend(catalog.movies(), &mut answers).unwrap();
    assert!(!found.is_empty());
    assert!(found.iter().all(|m| m.genre == found[0].genre));
}
