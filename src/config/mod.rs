//! Configuration management for pokedeck

mod io;
mod types;

pub use io::CONFIG_PATH_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

impl Config {
    /// Get the config file path (~/.config/pokedeck/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Reject settings that would make paging or chunking meaningless.
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.count == 0 {
            return Err("catalog.count must be at least 1".to_string());
        }
        if self.catalog.page_size == 0 {
            return Err("catalog.page_size must be at least 1".to_string());
        }
        if self.scheduler.chunk_size == 0 {
            return Err("scheduler.chunk_size must be at least 1".to_string());
        }
        if self.cache.capacity == Some(0) {
            return Err("cache.capacity must be at least 1 when set".to_string());
        }
        if let Some(entry) = self
            .preload
            .critical
            .iter()
            .find(|entry| entry.id == 0 || entry.id > self.catalog.count)
        {
            return Err(format!(
                "preload.critical entry '{}' has id {} outside 1..={}",
                entry.name, entry.id, self.catalog.count
            ));
        }
        Ok(())
    }

    /// Per-asset timeout for the critical preload
    pub fn asset_timeout(&self) -> Duration {
        Duration::from_millis(self.preload.asset_timeout_ms)
    }
}
