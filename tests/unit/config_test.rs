//! Unit tests for config module

use std::fs;

use pokedeck::config::CriticalEntry;
use pokedeck::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.catalog.count, 151);
    assert_eq!(config.catalog.page_size, 20);
    assert_eq!(config.scheduler.chunk_size, 10);
    assert!(config.cache.capacity.is_none());
    assert_eq!(config.preload.asset_timeout_ms, 5000);

    let ids: Vec<u32> = config.preload.critical.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 4, 7, 25]);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml_str = r#"
[catalog]
page_size = 12

[cache]
capacity = 50
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.catalog.page_size, 12);
    assert_eq!(config.catalog.count, 151);
    assert_eq!(config.cache.capacity, Some(50));
    assert_eq!(config.scheduler.chunk_size, 10);
    assert_eq!(config.preload.critical.len(), 4);
}

#[test]
fn critical_entries_parse_from_toml() {
    let toml_str = r#"
[preload]
asset_timeout_ms = 1500

[[preload.critical]]
id = 150
name = "mewtwo"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.preload.critical, vec![CriticalEntry::new(150, "mewtwo")]);
    assert_eq!(config.asset_timeout().as_millis(), 1500);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.cache.capacity = Some(64);
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn validate_rejects_zero_sizes() {
    let mut config = Config::default();
    config.catalog.page_size = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.scheduler.chunk_size = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.cache.capacity = Some(0);
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_critical_id_outside_catalog() {
    let mut config = Config::default();
    config.catalog.count = 10;
    let err = config.validate().unwrap_err();
    assert!(err.contains("pikachu"), "{}", err);
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.catalog.page_size = 30;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn load_from_invalid_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[scheduler]\nchunk_size = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}
