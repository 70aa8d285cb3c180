//! CLI contract tests for `way-match`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const TESTING: &str = r#"{"id":"testing","description":"writing unit tests, test coverage, mocking dependencies, test-driven development","vocabulary":"unittest coverage mock tdd assertion jest pytest rspec testcase"}"#;
const CONFIG: &str = r#"{"id":"config","description":"application configuration, environment variables, dotenv files, config file management","vocabulary":"dotenv environment configuration envvar config.json config.yaml"}"#;

fn way_match() -> assert_cmd::Command {
    cargo_bin_cmd!("way-match")
}

fn corpus_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("tempfile");
    fs::write(file.path(), lines.join("\n") + "\n").expect("write corpus");
    file
}

#[test]
fn version_and_help_exit_zero() {
    way_match()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("way-match 0.1.0"));

    way_match()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pair").and(predicate::str::contains("score")));

    way_match().arg("-h").assert().success();
}

#[test]
fn usage_errors_exit_one() {
    way_match().assert().code(1);
    way_match().arg("frobnicate").assert().code(1);
    way_match()
        .args(["pair", "--query", "write tests"])
        .assert()
        .code(1);
    way_match()
        .args(["score", "--corpus", "x.jsonl", "--query", "q", "--bogus"])
        .assert()
        .code(1);
    way_match()
        .args(["pair", "--description", "d", "--query"])
        .assert()
        .code(1);
}

#[test]
fn invalid_parameters_are_rejected() {
    way_match()
        .args(["pair", "--description", "unit tests", "--query", "tests", "--b", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn pair_match_and_miss() {
    way_match()
        .args([
            "pair",
            "--description",
            "writing unit tests, test coverage, mocking dependencies, test-driven development",
            "--vocabulary",
            "unittest coverage mock tdd assertion jest pytest rspec testcase",
            "--query",
            "add pytest coverage for the parser",
        ])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("match: score="));

    way_match()
        .args([
            "pair",
            "--description",
            "deploying containers to kubernetes",
            "--query",
            "what should I cook for dinner",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "match: score=0.0000 threshold=0.4000",
        ));
}

#[test]
fn score_ranks_testing_over_config() {
    let corpus = corpus_file(&[CONFIG, TESTING]);
    way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "how do I write tests for this function"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("testing\t").and(predicate::str::contains("config").not()));
}

#[test]
fn score_output_is_tab_separated_and_truncated() {
    let corpus = corpus_file(&[TESTING, "garbage line", CONFIG]);
    let out = way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "dotenv environment variables"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let fields: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], "config");
    assert_eq!(fields[1].split('.').nth(1).map(str::len), Some(4));
    assert_eq!(
        fields[2],
        "application configuration, environment variables, dotenv..."
    );
}

#[test]
fn score_without_matches_fails() {
    let corpus = corpus_file(&[TESTING, CONFIG]);
    way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "bake sourdough bread"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no matches above threshold"));
}

#[test]
fn score_empty_corpus_fails() {
    let corpus = corpus_file(&["not json", r#"{"id":"only-id"}"#]);
    way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "anything at all"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("empty corpus"));
}

#[test]
fn score_missing_corpus_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    way_match()
        .args(["score", "--corpus"])
        .arg(dir.path().join("missing.jsonl"))
        .args(["--query", "tests"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open corpus file"));
}

#[test]
fn per_document_thresholds() {
    let strict = r#"{"id":"strict","description":"kubernetes cluster operations","threshold":99.0}"#;
    let unset = r#"{"id":"unset","description":"kubernetes cluster operations"}"#;
    let zero = r#"{"id":"zero","description":"kubernetes cluster operations","threshold":0}"#;
    let corpus = corpus_file(&[strict, unset, zero]);
    way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "kubernetes", "--threshold", "0.01"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("zero\t")
                .and(predicate::str::contains("strict").not())
                .and(predicate::str::contains("unset").not()),
        );
}

#[test]
fn missing_threshold_ignores_global_override() {
    let a = r#"{"id":"a","description":"kubernetes cluster operations"}"#;
    let b = r#"{"id":"b","description":"kubernetes cluster operations"}"#;
    let corpus = corpus_file(&[a, b]);
    way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "kubernetes", "--threshold", "0.01"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no matches above threshold"));
}

#[test]
fn tied_scores_print_in_load_order() {
    let a = r#"{"id":"A","description":"rust borrow checker lifetimes"}"#;
    let b = r#"{"id":"B","description":"rust borrow checker lifetimes"}"#;
    let c = r#"{"id":"C","description":"python garbage collector"}"#;
    let corpus = corpus_file(&[a, b, c]);
    let out = way_match()
        .args(["score", "--corpus"])
        .arg(corpus.path())
        .args(["--query", "borrow checker"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(ids, vec!["A", "B"]);
}
