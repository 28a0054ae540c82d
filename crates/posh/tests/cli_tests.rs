//! CLI integration tests
//!
//! Runs the built `posh` binary and checks stdout, stderr and exit codes.

mod common;

use common::TestHarness;
use predicates::prelude::*;

// =============================================================================
// join
// =============================================================================

#[test]
fn test_join_with_oxford_comma() {
    TestHarness::new()
        .run(&["join", "a", "b", "c"])
        .success()
        .stdout("a, b, and c\n");
}

#[test]
fn test_join_without_oxford_comma() {
    TestHarness::new()
        .run(&["join", "--no-oxford-comma", "a", "b", "c"])
        .success()
        .stdout("a, b and c\n");
}

#[test]
fn test_join_skips_empty_fragments() {
    TestHarness::new()
        .run(&["join", "a", "", "b"])
        .success()
        .stdout("a and b\n");
}

#[test]
fn test_join_reads_config_from_env() {
    TestHarness::new()
        .env("POSH_CONJUNCTION", "or")
        .env("POSH_OXFORD_COMMA", "false")
        .run(&["join", "tea", "coffee", "juice"])
        .success()
        .stdout("tea, coffee or juice\n");
}

#[test]
fn test_join_flag_overrides_env_oxford_comma() {
    TestHarness::new()
        .env("POSH_OXFORD_COMMA", "false")
        .run(&["join", "--oxford-comma", "a", "b", "c"])
        .success()
        .stdout("a, b, and c\n");
}

#[test]
fn test_join_json() {
    TestHarness::new()
        .run(&["--json", "join", "a", "b"])
        .success()
        .stdout(predicate::str::contains(r#""result": "a and b""#));
}

// =============================================================================
// ordinal / extract / trim
// =============================================================================

#[test]
fn test_ordinals() {
    TestHarness::new()
        .run(&["ordinal", "1", "11", "21", "111", "121"])
        .success()
        .stdout("1st\n11th\n21st\n111th\n121st\n");
}

#[test]
fn test_extract_match() {
    TestHarness::new()
        .run(&["extract", r"^\$(\d*\.?\d*)%?$", "$5.43"])
        .success()
        .stdout("5.43\n");
}

#[test]
fn test_extract_no_match_is_success() {
    TestHarness::new()
        .run(&["extract", r"^(\d*\.?\d*)%?$", "$5.43"])
        .success()
        .stdout("");
}

#[test]
fn test_extract_wrong_group_count_fails_with_usage_code() {
    TestHarness::new()
        .run(&["extract", r"(\d+)-(\d+)", "1-2"])
        .failure()
        .code(64)
        .stderr(predicate::str::contains("capture groups"))
        .stderr(predicate::str::contains("Suggestion:"));
}

#[test]
fn test_extract_malformed_pattern_json_error() {
    TestHarness::new()
        .run(&["--json", "extract", r"(\d+", "12"])
        .failure()
        .code(64)
        .stderr(predicate::str::contains(r#""category": "invalid_input""#));
}

#[test]
fn test_trim() {
    TestHarness::new()
        .run(&["trim", "  padded \n"])
        .success()
        .stdout("padded\n");
}

// =============================================================================
// queue
// =============================================================================

#[test]
fn test_queue_keeps_last_elements() {
    TestHarness::new()
        .run(&["queue", "--capacity", "2", "a", "b", "c"])
        .success()
        .stdout("b\nc\n");
}

#[test]
fn test_queue_capacity_from_env() {
    TestHarness::new()
        .env("POSH_QUEUE_CAPACITY", "1")
        .run(&["queue", "a", "b", "c"])
        .success()
        .stdout("c\n");
}

#[test]
fn test_queue_zero_capacity() {
    TestHarness::new()
        .run(&["queue", "--capacity", "0", "a", "b"])
        .success()
        .stdout("");
}

#[test]
fn test_queue_negative_capacity_fails() {
    TestHarness::new()
        .run(&["queue", "--capacity", "-1", "a"])
        .failure()
        .code(64)
        .stderr(predicate::str::contains("Invalid capacity"));
}

// =============================================================================
// darken / timestamp
// =============================================================================

#[test]
fn test_darken() {
    TestHarness::new()
        .run(&["darken", "--amount", "1", "#ff8040"])
        .success()
        .stdout("#000000\n");
}

#[test]
fn test_darken_rejects_bad_color() {
    TestHarness::new()
        .run(&["darken", "orange"])
        .failure()
        .code(64)
        .stderr(predicate::str::contains("hex color"));
}

#[test]
fn test_timestamp_round_down() {
    TestHarness::new()
        .run(&["timestamp", "--at", "2015-11-27T15:32:00+00:00", "--round", "down"])
        .success()
        .stdout("Nov 27, 2015, 12:00 AM\n");
}

#[test]
fn test_timestamp_invalid_input() {
    TestHarness::new()
        .run(&["timestamp", "--at", "next tuesday"])
        .failure()
        .code(64)
        .stderr(predicate::str::contains("RFC 3339"));
}

// =============================================================================
// logging / completions
// =============================================================================

#[test]
fn test_verbose_logs_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("posh.log");

    TestHarness::new()
        .env("POSH_LOG", log_path.to_str().unwrap())
        .run(&["--verbose", "extract", "(a)", "b"])
        .success();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("pattern did not match the whole input"));
}

#[test]
fn test_completions() {
    TestHarness::new()
        .run(&["completions", "bash"])
        .success()
        .stdout(predicate::str::contains("posh"));
}
