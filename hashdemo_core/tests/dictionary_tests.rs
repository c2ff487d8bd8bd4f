//! Dictionary search behavior

use hashdemo_core::search;
use hashdemo_core::{
    AlgorithmRegistry, DictionarySearch, HashAlgorithm, Outcome, SearchContext, SearchMode,
    SearchStrategy, TargetDigest, hash,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

fn word_list(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn target(password: &str, algorithm: HashAlgorithm) -> TargetDigest {
    TargetDigest::new(&hash(password, algorithm).unwrap())
}

#[test]
fn test_finds_word_in_list() {
    let list = word_list(&["hello", "world", "abc"]);
    let digest = hash("world", HashAlgorithm::SHA1).unwrap();

    let result = search::dictionary(&digest, HashAlgorithm::SHA1, list.path());

    assert_eq!(result.outcome, Outcome::Found("world".to_string()));
    assert_eq!(result.mode, SearchMode::Dictionary);
    assert_eq!(result.candidates_tried, 2);
}

#[test]
fn test_missing_file_is_read_error_with_zero_elapsed() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let digest = hash("world", HashAlgorithm::MD5).unwrap();

    let result = search::dictionary(&digest, HashAlgorithm::MD5, &missing);

    assert_eq!(result.outcome, Outcome::DictionaryReadError);
    assert_eq!(result.elapsed_seconds(), 0.0);
    assert_eq!(result.outcome.label(), "Dictionary Error");
}

#[test]
fn test_directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let digest = hash("world", HashAlgorithm::MD5).unwrap();

    let result = search::dictionary(&digest, HashAlgorithm::MD5, dir.path());

    assert_eq!(result.outcome, Outcome::DictionaryReadError);
    assert_eq!(result.elapsed_seconds(), 0.0);
}

#[test]
fn test_no_match_scans_every_line_once() {
    let list = word_list(&["hello", "world", "abc", "letmein"]);
    let digest = hash("password", HashAlgorithm::MD5).unwrap();

    let result = search::dictionary(&digest, HashAlgorithm::MD5, list.path());

    assert_eq!(result.outcome, Outcome::NotFound);
    assert_eq!(result.candidates_tried, 4);
    assert_eq!(result.outcome.label(), "Not Found in Dictionary");
}

#[test]
fn test_stops_at_first_match() {
    let list = word_list(&["alpha", "secret", "beta", "secret", "gamma"]);

    let result = DictionarySearch::new(list.path()).search(
        &target("secret", HashAlgorithm::MD5),
        HashAlgorithm::MD5,
        &SearchContext::default(),
    );

    assert_eq!(result.outcome, Outcome::Found("secret".to_string()));
    assert_eq!(result.candidates_tried, 2);
}

#[test]
fn test_crlf_and_invalid_bytes_tolerated() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"first\r\npass\xfe\xffword\r\nlast").unwrap();
    file.flush().unwrap();

    let result = DictionarySearch::new(file.path()).search(
        &target("password", HashAlgorithm::SHA1),
        HashAlgorithm::SHA1,
        &SearchContext::default(),
    );

    assert_eq!(result.outcome, Outcome::Found("password".to_string()));
}

#[test]
fn test_padded_and_carriage_return_lines_match() {
    let digest = hash("abc", HashAlgorithm::MD5).unwrap();
    let contents: [&[u8]; 4] = [b"abc \n", b"abc\t\r\n", b"  abc\n", b"xyz\rabc\r"];

    for raw in contents {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(raw).unwrap();
        file.flush().unwrap();

        let result = search::dictionary(&digest, HashAlgorithm::MD5, file.path());
        assert_eq!(
            result.outcome,
            Outcome::Found("abc".to_string()),
            "word list {raw:?}"
        );
    }
}

#[test]
fn test_fresh_search_rereads_from_start() {
    let list = word_list(&["one", "two", "three"]);
    let strategy = DictionarySearch::new(list.path());
    let target = target("two", HashAlgorithm::MD5);

    for _ in 0..2 {
        let result = strategy.search(&target, HashAlgorithm::MD5, &SearchContext::default());
        assert_eq!(result.outcome, Outcome::Found("two".to_string()));
        assert_eq!(result.candidates_tried, 2);
    }
}

#[test]
fn test_empty_file_is_not_found() {
    let list = NamedTempFile::new().unwrap();
    let digest = hash("anything", HashAlgorithm::MD5).unwrap();

    let result = search::dictionary(&digest, HashAlgorithm::MD5, list.path());

    assert_eq!(result.outcome, Outcome::NotFound);
    assert_eq!(result.candidates_tried, 0);
}

#[test]
fn test_unavailable_algorithm_skips_every_line() {
    let list = word_list(&["hello", "world"]);
    let context = SearchContext::default().with_registry(Arc::new(AlgorithmRegistry::new()));

    let result = DictionarySearch::new(list.path()).search(
        &target("world", HashAlgorithm::MD5),
        HashAlgorithm::MD5,
        &context,
    );

    assert_eq!(result.outcome, Outcome::NotFound);
    assert_eq!(result.hash_failures, 2);
}

#[test]
fn test_cancelled_dictionary_search() {
    let list = word_list(&["hello", "world"]);
    let context = SearchContext::default();
    context.cancellation.cancel();

    let result = DictionarySearch::new(list.path()).search(
        &target("world", HashAlgorithm::MD5),
        HashAlgorithm::MD5,
        &context,
    );

    assert_eq!(result.outcome, Outcome::Cancelled);
}

#[test]
fn test_relative_missing_path() {
    let result = search::dictionary(
        "00",
        HashAlgorithm::MD5,
        Path::new("no-such-dictionary-file.txt"),
    );
    assert_eq!(result.outcome, Outcome::DictionaryReadError);
}
