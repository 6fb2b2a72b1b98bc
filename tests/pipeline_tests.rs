/// Pipeline integration tests — end-to-end export-to-sentence generation.

use chat_babble::config::Config;
use chat_babble::core::pipeline::{Pipeline, PipelineError};
use chat_babble::core::sampler::SampleError;
use rand::rngs::mock::StepRng;
use std::path::{Path, PathBuf};

fn fixture_config() -> Config {
    Config {
        source_dir: PathBuf::from("tests/fixtures/telegram_dumps"),
        ..Config::for_target("user1")
    }
}

#[test]
fn trains_on_target_sentences() {
    let pipeline = Pipeline::new(fixture_config()).unwrap();
    let (stats, matrix) = pipeline.train().unwrap();

    assert_eq!(stats.retained, 5);
    assert_eq!(matrix.count("i", "like"), 3);
    assert_eq!(
        matrix.most_common("like", None),
        vec![("cats", 1), ("dogs", 1), ("coffee", 1)]
    );
    assert_eq!(matrix.count("hello", "world"), 1);
    assert_eq!(matrix.count("a", "lot"), 1);
    assert_eq!(matrix.pair_count(), 8);
    assert_eq!(matrix.len(), 4);
}

#[test]
fn first_candidate_picker_walks_first_seen_path() {
    let config = Config {
        sentence_count: 2,
        sentence_length: 3,
        ..fixture_config()
    };
    let pipeline = Pipeline::new(config).unwrap();
    let babble = pipeline.run_with(&mut StepRng::new(0, 0)).unwrap();

    // "cats" has no successor, so the last step stalls.
    assert_eq!(babble.sentences, vec!["i like cats", "i like cats"]);
    assert_eq!(babble.pair_count, 8);
    assert_eq!(babble.vocabulary, 4);
}

#[test]
fn top_one_follows_most_frequent_successor() {
    let config = Config {
        sentence_count: 20,
        sentence_length: 3,
        top_k: Some(1),
        seed: Some(42),
        ..fixture_config()
    };
    let babble = Pipeline::new(config).unwrap().run().unwrap();

    let allowed = ["i like cats", "like cats", "hello world", "a lot"];
    for sentence in &babble.sentences {
        assert!(allowed.contains(&sentence.as_str()), "unexpected {:?}", sentence);
    }
}

#[test]
fn zero_length_sentences_are_single_words() {
    let config = Config {
        sentence_count: 10,
        sentence_length: 0,
        seed: Some(3),
        ..fixture_config()
    };
    let babble = Pipeline::new(config).unwrap().run().unwrap();

    assert_eq!(babble.sentences.len(), 10);
    for sentence in &babble.sentences {
        assert!(["i", "like", "hello", "a"].contains(&sentence.as_str()));
    }
}

#[test]
fn ron_config_drives_a_run() {
    let config = Config::load_from_ron(Path::new("tests/fixtures/babble.ron")).unwrap();
    let pipeline = Pipeline::new(config).unwrap();

    let first = pipeline.run().unwrap();
    let second = pipeline.run().unwrap();
    assert_eq!(first.sentences.len(), 3);
    assert_eq!(first.sentences, second.sentences);
    for sentence in &first.sentences {
        assert!(sentence.split(' ').count() <= 5);
    }
}

#[test]
fn missing_dump_directory_reports_empty_model() {
    let config = Config {
        source_dir: PathBuf::from("tests/fixtures/no_such_dir"),
        ..fixture_config()
    };
    let result = Pipeline::new(config).unwrap().run();
    assert!(matches!(
        result,
        Err(PipelineError::Sample(SampleError::EmptyModel))
    ));
}

#[test]
fn broken_export_is_fatal() {
    let config = Config {
        source_dir: PathBuf::from("tests/fixtures/broken_dumps"),
        ..fixture_config()
    };
    let err = Pipeline::new(config).unwrap().run().unwrap_err();
    assert!(matches!(err, PipelineError::Load(_)));
    assert!(err.to_string().contains("truncated.json"));
}
