//! `pokedeck config` tests against temporary config files.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

/// Run pokedeck with the given config file and capture output.
fn run_pokedeck(config: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pokedeck"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("POKEDECK_CONFIG", config)
        .output()
        .expect("Failed to execute pokedeck");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn config_show_prints_defaults_without_file() {
    let temp = TempDir::new().unwrap();
    let (stdout, _, code) = run_pokedeck(&temp.path().join("config.toml"), &["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("base_url = \"https://pokeapi.co/api/v2\""));
    assert!(stdout.contains("count = 151"));
    assert!(stdout.contains("chunk_size = 10"));
    assert!(stdout.contains("name = \"pikachu\""));
}

#[test]
fn config_show_merges_file_with_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[catalog]\npage_size = 12\n\n[cache]\ncapacity = 50\n").unwrap();

    let (stdout, _, code) = run_pokedeck(&path, &["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("page_size = 12"));
    assert!(stdout.contains("capacity = 50"));
    assert!(stdout.contains("count = 151"));
}

#[test]
fn config_path_honours_override() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    let (stdout, _, code) = run_pokedeck(&path, &["config", "path"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), path.display().to_string());
}

#[test]
fn invalid_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[catalog]\npage_size = 0\n").unwrap();

    let (_, stderr, code) = run_pokedeck(&path, &["share", "1"]);

    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid config"), "{}", stderr);
}

#[test]
fn unparsable_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[catalog\n").unwrap();

    let (_, stderr, code) = run_pokedeck(&path, &["config", "show"]);

    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to parse config file"), "{}", stderr);
}
