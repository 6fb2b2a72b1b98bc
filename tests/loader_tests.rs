/// Loader integration tests — filtering and normalizing real export fixtures.

use chat_babble::core::loader::{load_messages, LoadError};
use std::path::Path;

const DUMPS: &str = "tests/fixtures/telegram_dumps";

fn words(sentence: &[&str]) -> Vec<String> {
    sentence.iter().map(|w| w.to_string()).collect()
}

#[test]
fn counts_files_and_messages() {
    let corpus = load_messages("user1", Path::new(DUMPS)).unwrap();

    // README.txt and archive/ are not exports
    assert_eq!(corpus.stats.files, 2);
    assert_eq!(corpus.stats.messages, 9);
    assert_eq!(corpus.stats.retained, 5);
    assert_eq!(corpus.stats.skipped_rich, 1);
    assert_eq!(corpus.stats.sentences, corpus.sentences.len());
    assert_eq!(corpus.sentences.len(), 6);
}

#[test]
fn splits_target_messages_into_sentences() {
    let corpus = load_messages("user1", Path::new(DUMPS)).unwrap();

    for expected in [
        words(&["i", "like", "cats"]),
        words(&["i", "like", "dogs"]),
        words(&["hello", "world"]),
        words(&["goodbye"]),
        words(&["i", "like", "coffee"]),
        words(&["a", "lot"]),
    ] {
        assert!(
            corpus.sentences.contains(&expected),
            "missing sentence {:?}",
            expected
        );
    }
}

#[test]
fn other_authors_and_rich_bodies_contribute_nothing() {
    let corpus = load_messages("user1", Path::new(DUMPS)).unwrap();
    let tokens: Vec<&str> = corpus
        .sentences
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    for foreign in ["nobody", "pets", "where", "report", "check", "nested"] {
        assert!(!tokens.contains(&foreign), "unexpected token {:?}", foreign);
    }
    assert!(!tokens.iter().any(|t| t.contains("example")));
}

#[test]
fn other_target_gets_only_their_messages() {
    let corpus = load_messages("user2", Path::new(DUMPS)).unwrap();
    assert_eq!(corpus.stats.retained, 1);
    assert_eq!(corpus.sentences, vec![words(&["nobody", "asked", "about", "pets"])]);
}

#[test]
fn unknown_target_yields_empty_corpus() {
    let corpus = load_messages("user404", Path::new(DUMPS)).unwrap();
    assert_eq!(corpus.stats.files, 2);
    assert_eq!(corpus.stats.retained, 0);
    assert!(corpus.sentences.is_empty());
}

#[test]
fn invalid_export_aborts_the_load() {
    let result = load_messages("user1", Path::new("tests/fixtures/broken_dumps"));
    match result {
        Err(LoadError::Parse { path, .. }) => {
            assert!(path.ends_with("truncated.json"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}
