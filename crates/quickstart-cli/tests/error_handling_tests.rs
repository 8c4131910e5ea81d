//! Tests for error handling and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quickstart(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pelican-quickstart").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("HOME", dir.path())
        .env_remove("VIRTUAL_ENV")
        .args(["--output-format", "plain", "--no-color"]);
    cmd
}

#[test]
fn test_closed_input_cancels_without_writing() {
    let dir = TempDir::new().unwrap();

    quickstart(&dir)
        .write_stdin("site\nMeu Blog\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"))
        .stderr(predicate::str::contains("No files were written"));

    assert!(!dir.path().join("site").exists());
}

#[test]
fn test_retry_cap_from_environment() {
    let dir = TempDir::new().unwrap();

    quickstart(&dir)
        .env("PELICAN_QUICKSTART__PROMPT__MAX_ATTEMPTS", "1")
        .write_stdin("site\nMeu Blog\nAna\nportugues\npt\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Gave up after 1"));
}

#[test]
fn test_invalid_lang_flag() {
    let dir = TempDir::new().unwrap();

    quickstart(&dir)
        .args(["--lang", "portugues"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--lang"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    quickstart(&dir)
        .args(["--config", "nao-existe.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("quickstart.toml");
    std::fs::write(&config, "[prompt]\nmax_attempts = \"muitas\"\n").unwrap();

    quickstart(&dir)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(4);
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    quickstart(&dir)
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_config_lang_of_wrong_length() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("quickstart.toml");
    std::fs::write(&config, "[defaults]\nlang = \"por\"\n").unwrap();

    quickstart(&dir)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.lang"));
}
