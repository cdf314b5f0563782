//! Unit tests for the background page scheduler

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pokedeck::loader::{CatalogLoader, DetailLoader};
use pokedeck::scheduler::{Generation, ProgressReporter};
use pokedeck::{BackgroundScheduler, Endpoints, SharedCache};

use crate::helpers::pokeapi;

#[tokio::test]
async fn progress_is_monotonic_and_reaches_hundred() {
    let fetcher = Arc::new(pokeapi(151));
    let cache = SharedCache::unbounded();
    let catalog = CatalogLoader::new(Arc::clone(&fetcher), cache.clone(), Endpoints::default())
        .load_catalog(151)
        .await
        .unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let progress = ProgressReporter::with_callback(move |p| sink.lock().unwrap().push(p.percent));

    let summary = BackgroundScheduler::new(DetailLoader::new(fetcher, cache), 10, Generation::new())
        .schedule_remaining(catalog, &progress)
        .await;

    let seen = seen.lock().unwrap();
    assert_eq!(summary.chunks_completed, 16);
    assert_eq!(seen.len(), 16);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen[0], 6);
    assert_eq!(seen.last(), Some(&100));
}

#[tokio::test(start_paused = true)]
async fn teardown_while_chunk_in_flight_suppresses_report() {
    let fetcher = Arc::new(pokeapi(20));
    let endpoints = Endpoints::default();
    fetcher.delay(endpoints.detail(5), Duration::from_secs(1));

    let cache = SharedCache::unbounded();
    let catalog = CatalogLoader::new(Arc::clone(&fetcher), cache.clone(), endpoints)
        .load_catalog(20)
        .await
        .unwrap();

    let generation = Generation::new();
    let progress = ProgressReporter::new();
    let watcher = progress.watcher();
    let handle = BackgroundScheduler::new(DetailLoader::new(fetcher, cache), 10, generation.clone())
        .spawn(catalog, progress);

    tokio::time::sleep(Duration::from_millis(100)).await;
    generation.advance();

    let summary = handle.await.unwrap();
    assert!(summary.cancelled);
    assert_eq!(summary.chunks_completed, 0);
    assert_eq!(watcher.percent(), 0);
}
