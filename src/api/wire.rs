//! JSON payload shapes returned by the catalog API.
//!
//! Only the fields the loaders read are modelled; everything else in the
//! (large) PokeAPI responses is ignored by serde.

use serde::Deserialize;

/// `{ results: [{name, url}, ...] }` from `/pokemon?limit=` and `/type`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResourceList {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Detail response for one entity.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}
