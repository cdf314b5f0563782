//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub preload: PreloadConfig,
}

/// Remote endpoints and derived asset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// REST API root (`{base_url}/pokemon`, `{base_url}/type`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Artwork root; images live at `{sprite_base_url}/{id}.png`
    #[serde(default = "default_sprite_base_url")]
    pub sprite_base_url: String,
    /// Cry root; audio lives at `{cry_base_url}/{slug}.ogg`
    #[serde(default = "default_cry_base_url")]
    pub cry_base_url: String,
    /// Page that shared links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

pub fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

pub fn default_sprite_base_url() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork"
        .to_string()
}

pub fn default_cry_base_url() -> String {
    "https://play.pokemonshowdown.com/audio/cries".to_string()
}

pub fn default_share_base_url() -> String {
    "https://pokedeck.app/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sprite_base_url: default_sprite_base_url(),
            cry_base_url: default_cry_base_url(),
            share_base_url: default_share_base_url(),
        }
    }
}

/// Catalog size and paging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of summaries requested (`?limit=`)
    #[serde(default = "default_count")]
    pub count: u32,
    /// Entries per Pokédex page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

pub fn default_count() -> u32 {
    151
}

pub fn default_page_size() -> usize {
    20
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            page_size: default_page_size(),
        }
    }
}

/// Session cache bound
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Soft entry limit; absent means the cache never evicts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

/// Background detail scheduling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Entities fetched together before moving on
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

pub fn default_chunk_size() -> usize {
    10
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

/// Critical asset warm-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreloadConfig {
    /// Per-asset limit before the asset counts as failed
    #[serde(default = "default_asset_timeout_ms")]
    pub asset_timeout_ms: u64,
    /// Entities whose media is requested before anything else
    #[serde(default = "default_critical")]
    pub critical: Vec<CriticalEntry>,
}

/// One critical entity. The API name is needed to derive the cry URL
/// before the catalog has loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalEntry {
    pub id: u32,
    pub name: String,
}

impl CriticalEntry {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

pub fn default_critical() -> Vec<CriticalEntry> {
    vec![
        CriticalEntry::new(1, "bulbasaur"),
        CriticalEntry::new(4, "charmander"),
        CriticalEntry::new(7, "squirtle"),
        CriticalEntry::new(25, "pikachu"),
    ]
}

pub fn default_asset_timeout_ms() -> u64 {
    5_000
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            asset_timeout_ms: default_asset_timeout_ms(),
            critical: default_critical(),
        }
    }
}
