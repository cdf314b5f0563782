//! CLI surface tests that need no network access.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// pokedeck with colors off and config pointed at an empty temp dir.
fn pokedeck(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pokedeck").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("POKEDECK_CONFIG", temp.path().join("config.toml"))
        .env_remove("POKEDECK_LOG");
    cmd
}

#[test]
fn help_lists_every_command() {
    let temp = TempDir::new().unwrap();
    let assert = pokedeck(&temp).arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for command in ["reveal", "show", "list", "types", "warm", "share", "config", "completions"] {
        assert!(stdout.contains(command), "help is missing {}", command);
    }
}

#[test]
fn version_flag_prints_version() {
    let temp = TempDir::new().unwrap();
    pokedeck(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn share_prints_link() {
    let temp = TempDir::new().unwrap();
    pokedeck(&temp)
        .args(["share", "25"])
        .assert()
        .success()
        .stdout("https://pokedeck.app/?pokemon=25\n");
}

#[test]
fn share_rejects_id_outside_pokedex() {
    let temp = TempDir::new().unwrap();
    pokedeck(&temp)
        .args(["share", "152"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the Pokédex"));
}

#[test]
fn completions_generate_script() {
    let temp = TempDir::new().unwrap();
    pokedeck(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pokedeck"));
}

#[test]
fn unknown_command_fails() {
    let temp = TempDir::new().unwrap();
    pokedeck(&temp).arg("catch").assert().failure();
}

#[test]
fn invalid_log_filter_is_reported() {
    let temp = TempDir::new().unwrap();
    pokedeck(&temp)
        .env("POKEDECK_LOG", "pokedeck=loud")
        .args(["share", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("POKEDECK_LOG"));
}
