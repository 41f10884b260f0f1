//! Command-line integration tests for the `safename` binary.
//!
//! These tests run the real executable through `assert_cmd`, feed it names
//! via arguments or stdin, and check stdout, stderr and the exit status.
//! `tempfile` provides throwaway YAML option files.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Runs `safename` with `args`, feeding `input` on stdin.
fn run_safename(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("safename").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn test_names_from_arguments() {
    run_safename("", &["CON.txt", "a/b\\c:d", "trailing...   "])
        .success()
        .stdout("ＣＯＮ.txt\na／b＼c：d\ntrailing\n");
}

#[test]
fn test_names_from_stdin() {
    run_safename("COM1\ncon1\nwhat?\n", &[])
        .success()
        .stdout("ＣＯＭ1\ncon1\nwhat？\n");
}

#[test]
fn test_basic_leaves_punctuation() {
    run_safename("", &["--basic", "a[b]"]).success().stdout("a[b]\n");
    run_safename("", &["a[b]"]).success().stdout("a［b］\n");
}

#[test]
fn test_remove_deletes() {
    run_safename("", &["--remove", "a<b>[c]"]).success().stdout("abc\n");
}

#[test]
fn test_empty_result_allowed_by_default() {
    run_safename("", &["..."]).success().stdout("\n");
}

#[test]
fn test_reject_empty_fails() {
    run_safename("", &["--reject-empty", "ok", "  .  "])
        .failure()
        .stdout("ok\n")
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_config_file_and_flag_precedence() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "extended: false")?;
    writeln!(config, "empty_policy: reject")?;
    let path = config.path().to_str().unwrap();

    run_safename("", &["--config", path, "a[b]"]).success().stdout("a[b]\n");
    run_safename("", &["--config", path, ""])
        .failure()
        .stderr(predicate::str::contains("empty"));
    run_safename("", &["--config", path, "--remove", "x:y[z]"])
        .success()
        .stdout("xy[z]\n");
    Ok(())
}

#[test]
fn test_missing_config_file() {
    run_safename("", &["--config", "/no/such/options.yaml", "name"])
        .failure()
        .stderr(predicate::str::contains("/no/such/options.yaml"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    run_safename("", &["--debug", "a:b"])
        .success()
        .stdout("a：b\n")
        .stderr(predicate::str::contains("Effective options"));
}

#[test]
fn test_quiet_and_debug_conflict() {
    run_safename("", &["--quiet", "--debug", "x"]).failure();
}
