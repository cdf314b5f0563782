//! Test helper utilities

#![allow(dead_code)]

use serde_json::{json, Value};

use pokedeck::config::CriticalEntry;
use pokedeck::{Config, Endpoints, MemoryFetcher};

/// API slug for a fixture id.
pub fn api_name(id: u32) -> String {
    match id {
        1 => "bulbasaur".to_string(),
        4 => "charmander".to_string(),
        7 => "squirtle".to_string(),
        25 => "pikachu".to_string(),
        122 => "mr-mime".to_string(),
        _ => format!("mon-{}", id),
    }
}

/// Odd ids are fire, even ids are water.
pub fn fixture_type(id: u32) -> &'static str {
    if id % 2 == 1 {
        "fire"
    } else {
        "water"
    }
}

pub fn detail_body(id: u32) -> Value {
    json!({
        "height": 10 + id,
        "weight": 100 + id,
        "types": [{"type": {"name": fixture_type(id)}}],
        "stats": [
            {"stat": {"name": "hp"}, "base_stat": 40},
            {"stat": {"name": "speed"}, "base_stat": id % 150 + 1}
        ],
        "abilities": [{"ability": {"name": "blaze"}}],
        "moves": []
    })
}

/// In-memory PokeAPI serving `count` entities with details and media.
pub fn pokeapi(count: u32) -> MemoryFetcher {
    let endpoints = Endpoints::default();
    let fetcher = MemoryFetcher::new();

    let results: Vec<Value> = (1..=count)
        .map(|id| json!({"name": api_name(id), "url": endpoints.detail(id)}))
        .collect();
    fetcher.insert_json(endpoints.catalog(count), json!({ "results": results }));
    fetcher.insert_json(
        endpoints.types(),
        json!({"results": [{"name": "fire"}, {"name": "water"}]}),
    );

    for id in 1..=count {
        fetcher.insert_json(endpoints.detail(id), detail_body(id));
        fetcher.insert_asset(endpoints.image(id));
        fetcher.insert_asset(endpoints.shiny_image(id));
        fetcher.insert_asset(endpoints.cry(&api_name(id)));
    }
    fetcher
}

/// Default config scaled down to `count` entities.
pub fn config_for(count: u32) -> Config {
    let mut config = Config::default();
    config.catalog.count = count;
    config.preload.critical = vec![
        CriticalEntry::new(1, "bulbasaur"),
        CriticalEntry::new(4, "charmander"),
    ];
    config
}
