//! Canned PokeAPI responses for unit tests.

use serde_json::{json, Value};

use crate::api::{Endpoints, MemoryFetcher};
use crate::model::{SummaryRecord, STAT_NAMES};

const NAMES: [&str; 9] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
];

pub fn api_name(id: u32) -> String {
    match id {
        25 => "pikachu".to_string(),
        1..=9 => NAMES[(id - 1) as usize].to_string(),
        _ => format!("mon-{}", id),
    }
}

pub fn type_of(id: u32) -> &'static str {
    match (id, id % 3) {
        (25, _) => "electric",
        (_, 0) => "water",
        (_, 1) => "grass",
        _ => "fire",
    }
}

pub fn catalog_url(count: u32) -> String {
    Endpoints::default().catalog(count)
}

pub fn detail_url(id: u32) -> String {
    Endpoints::default().detail(id)
}

pub fn types_url() -> String {
    Endpoints::default().types()
}

/// Summary exactly as `CatalogLoader` derives it from the fixture listing.
pub fn fixture_summary(id: u32) -> SummaryRecord {
    let endpoints = Endpoints::default();
    let name = api_name(id);
    SummaryRecord {
        id,
        name: crate::model::display_name(&name),
        image_url: endpoints.image(id),
        shiny_image_url: endpoints.shiny_image(id),
        cry_url: endpoints.cry(&name),
        cry_fallback_url: endpoints.cry_fallback(&name),
        details_ref: endpoints.detail(id),
    }
}

pub fn detail_payload(id: u32) -> Value {
    let stats: Vec<Value> = STAT_NAMES
        .iter()
        .map(|name| json!({"base_stat": id % 200 + 1, "stat": {"name": name}}))
        .collect();
    json!({
        "id": id,
        "height": id,
        "weight": id * 10,
        "types": [{"slot": 1, "type": {"name": type_of(id)}}],
        "stats": stats,
        "abilities": [{"ability": {"name": "overgrow"}}],
        "moves": [{"move": {"name": "tackle"}}]
    })
}

/// Fetcher serving a full catalog of `count` entries with details and assets.
pub fn fixture_fetcher(count: u32) -> MemoryFetcher {
    let fetcher = MemoryFetcher::new();
    let endpoints = Endpoints::default();

    let results: Vec<Value> = (1..=count)
        .map(|id| json!({"name": api_name(id), "url": detail_url(id)}))
        .collect();
    fetcher.insert_json(catalog_url(count), json!({ "results": results }));
    fetcher.insert_json(
        types_url(),
        json!({"results": [{"name": "normal"}, {"name": "fire"}, {"name": "water"},
                           {"name": "grass"}, {"name": "electric"}]}),
    );

    for id in 1..=count {
        fetcher.insert_json(detail_url(id), detail_payload(id));
        let name = api_name(id);
        fetcher.insert_asset(endpoints.image(id));
        fetcher.insert_asset(endpoints.shiny_image(id));
        fetcher.insert_asset(endpoints.cry(&name));
    }

    fetcher
}
