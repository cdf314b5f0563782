//! Unit tests for a full session against an in-memory API

use std::sync::Arc;

use pokedeck::{get_page, CatalogFilter, Endpoints, Entity, ProgressReporter, Session};

use crate::helpers::{config_for, pokeapi};

#[tokio::test]
async fn start_warms_then_loads_catalog_once() {
    let fetcher = Arc::new(pokeapi(30));
    let mut session = Session::new(config_for(30), Arc::clone(&fetcher));

    let report = session.start().await;
    assert_eq!(report.outcomes.len(), 6);
    assert!(report.is_warm(1));
    assert!(report.is_warm(4));

    // A second load is served from the session cache
    session.load_catalog().await;
    assert_eq!(fetcher.call_count(&Endpoints::default().catalog(30)), 1);
    assert_eq!(session.types(), ["fire".to_string(), "water".to_string()]);
}

#[tokio::test]
async fn summaries_carry_display_names_and_media() {
    let mut session = Session::new(config_for(130), Arc::new(pokeapi(130)));
    session.load_catalog().await;

    let mime = &session.catalog()[121];
    assert_eq!(mime.id, 122);
    assert_eq!(mime.name, "Mr Mime");
    assert!(mime.cry_url.ends_with("/mrmime.ogg"));
    assert!(mime.cry_fallback_url.ends_with("/mrmime.mp3"));
    assert!(mime.image_url.ends_with("/122.png"));
}

#[tokio::test]
async fn direct_selection_ignores_pagination() {
    let fetcher = Arc::new(pokeapi(60));
    let mut session = Session::new(config_for(60), Arc::clone(&fetcher));
    session.load_catalog().await;

    let id = session.resolve_shared("https://pokedeck.app/?pokemon=57").unwrap();
    let entity = session.entity(id).await.unwrap();
    assert_eq!(entity.id(), 57);

    let details = entity.details.unwrap();
    assert!((details.height - 6.7).abs() < 1e-9);
    assert!((details.weight - 15.7).abs() < 1e-9);
    assert_eq!(details.types, vec!["fire"]);
}

#[tokio::test]
async fn failed_detail_is_retried_on_next_access() {
    let fetcher = Arc::new(pokeapi(10));
    let detail = Endpoints::default().detail(3);
    fetcher.fail(detail.clone(), 500);
    let mut session = Session::new(config_for(10), Arc::clone(&fetcher));
    session.load_catalog().await;

    let entity = session.entity(3).await.unwrap();
    assert!(!entity.is_detailed());
    assert_eq!(entity.summary.name, "Mon 3");

    session.entity(3).await;
    assert_eq!(fetcher.call_count(&detail), 2);
}

#[tokio::test]
async fn background_fill_enables_type_filter() {
    let mut session = Session::new(config_for(25), Arc::new(pokeapi(25)));
    session.load_catalog().await;

    let summary = session
        .spawn_background(ProgressReporter::new())
        .await
        .unwrap();
    assert_eq!(summary.total_chunks, 3);
    assert_eq!(summary.loaded, 25);

    let water = CatalogFilter::new().with_type("water").with_search("mon");
    let ids: Vec<u32> = session.filtered(&water).iter().map(Entity::id).collect();
    assert_eq!(ids, vec![2, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24]);
}

#[tokio::test]
async fn bounded_cache_evicts_but_stays_correct() {
    let mut config = config_for(60);
    config.cache.capacity = Some(50);
    let fetcher = Arc::new(pokeapi(60));
    let mut session = Session::new(config, Arc::clone(&fetcher));
    session.load_catalog().await;

    session.warm(&ProgressReporter::new()).await;
    assert_eq!(session.cache().len(), 50);

    // The list entry was inserted first and has been pruned; the loaded
    // catalog stays with the session
    assert_eq!(session.catalog().len(), 60);
    let entity = session.entity(1).await.unwrap();
    assert!(entity.is_detailed());
}

#[tokio::test]
async fn first_pokedex_page_shows_details_for_every_row() {
    let fetcher = Arc::new(pokeapi(45));
    let mut session = Session::new(config_for(45), Arc::clone(&fetcher));
    session.load_catalog().await;

    let rows = session.page_entities(1).await;
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(Entity::is_detailed));
    assert_eq!(fetcher.call_count(&Endpoints::default().detail(21)), 0);

    // Search-only listings load details for the shown rows as well
    let thirties = CatalogFilter::new().with_search("mon 3");
    let matches = session.filtered(&thirties);
    let page = get_page(&matches, 1, 20);
    let shown = session.with_details(page.items).await;
    assert_eq!(shown.len(), 11);
    assert!(shown.iter().all(Entity::is_detailed));
}
