//! Record types shared by every loader.
//!
//! A `SummaryRecord` is created once per entity when the catalog loads and
//! never changes. A `DetailRecord` is created lazily, at most once per
//! entity, and is likewise immutable. An `Entity` pairs the two; its details
//! are either entirely absent or entirely present.

use std::sync::Arc;

use deunicode::deunicode;
use serde::Serialize;

/// Stat names PokeAPI reports for every entity, in API order.
pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Lightweight, eagerly-loaded projection of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// 1-based catalog position, the sole identity key
    pub id: u32,
    /// Display name ("Mr Mime")
    pub name: String,
    /// Official artwork
    pub image_url: String,
    /// Shiny variant of the artwork
    pub shiny_image_url: String,
    /// Primary cry (.ogg)
    pub cry_url: String,
    /// Cry used when the primary fails to play (.mp3)
    pub cry_fallback_url: String,
    /// Locator for the detail fetch
    pub details_ref: String,
}

/// One base stat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

/// Heavier, lazily-loaded projection of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRecord {
    /// Type tags in slot order, never empty
    pub types: Vec<String>,
    /// Base stats in API order
    pub stats: Vec<Stat>,
    /// Metres
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

impl DetailRecord {
    /// Look up a base stat by name.
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.base)
    }

    /// Check whether this entity carries the given type tag.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(type_name))
    }
}

/// A catalog item with its details, when they have been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub summary: SummaryRecord,
    pub details: Option<Arc<DetailRecord>>,
}

impl Entity {
    pub fn new(summary: SummaryRecord, details: Option<Arc<DetailRecord>>) -> Self {
        Self { summary, details }
    }

    pub fn id(&self) -> u32 {
        self.summary.id
    }

    pub fn is_detailed(&self) -> bool {
        self.details.is_some()
    }

    /// "#025" style number used by the card and Pokédex tiles.
    pub fn number_label(&self) -> String {
        number_label(self.summary.id)
    }
}

/// Format an id the way cards display it.
pub fn number_label(id: u32) -> String {
    format!("#{:03}", id)
}

/// Convert an API slug to a display name: `mr-mime` becomes `Mr Mime`.
pub fn display_name(api_name: &str) -> String {
    api_name
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Audio file stem for a name: ASCII-folded, lowercase, alphanumerics only.
///
/// Accepts either the API slug or the display name (`Nidoran♀`,
/// `Mr. Mime`, `mr-mime` all fold to a stable stem).
pub fn cry_slug(name: &str) -> String {
    deunicode(name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
