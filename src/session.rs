//! One browsing session: config, fetcher, cache, catalog and generation.
//!
//! A `Session` is constructed explicitly and hands `Arc` handles to the
//! loaders and the background scheduler. Nothing lives in module globals.
//!
//! Startup order is fixed: critical assets are preloaded, then the catalog
//! loads, then the type list. A catalog failure does not abort startup; it
//! leaves an empty catalog and a notice for the front-end to show.

use std::sync::Arc;

use futures::future::join_all;
use rand::seq::SliceRandom;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::{Endpoints, Fetcher};
use crate::config::Config;
use crate::filter::CatalogFilter;
use crate::link::{self, LinkError};
use crate::loader::{find_by_id, load_types, Catalog, CatalogLoader, DetailLoader};
use crate::model::{Entity, SummaryRecord};
use crate::pagination::{get_page, Page};
use crate::preload::{PreloadReport, PriorityPreloader};
use crate::record_cache::SharedCache;
use crate::scheduler::{BackgroundScheduler, Generation, ProgressReporter, ScheduleSummary};

/// A user-visible message the front-end shows once and then dismisses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub struct Session<F: Fetcher> {
    config: Config,
    fetcher: Arc<F>,
    cache: SharedCache,
    endpoints: Endpoints,
    catalog: Catalog,
    types: Arc<Vec<String>>,
    generation: Generation,
    notices: Vec<Notice>,
}

impl<F: Fetcher> Session<F> {
    pub fn new(config: Config, fetcher: Arc<F>) -> Self {
        let cache = SharedCache::new(config.cache.capacity);
        let endpoints = Endpoints::from_config(&config.api);
        Self {
            config,
            fetcher,
            cache,
            endpoints,
            catalog: Arc::new(Vec::new()),
            types: Arc::new(Vec::new()),
            generation: Generation::new(),
            notices: Vec::new(),
        }
    }

    /// Preload critical assets, then load the catalog and the type list.
    pub async fn start(&mut self) -> PreloadReport {
        let report = self.preload().await;
        self.load_catalog().await;
        self.types = load_types(self.fetcher.as_ref(), &self.cache, &self.endpoints).await;
        report
    }

    /// Request the configured critical assets.
    pub async fn preload(&self) -> PreloadReport {
        PriorityPreloader::new(
            Arc::clone(&self.fetcher),
            self.endpoints.clone(),
            self.config.asset_timeout(),
        )
        .preload_critical(&self.config.preload.critical)
        .await
    }

    /// Load the catalog; on failure keep an empty one and queue a notice.
    pub async fn load_catalog(&mut self) -> &Catalog {
        let loader = CatalogLoader::new(
            Arc::clone(&self.fetcher),
            self.cache.clone(),
            self.endpoints.clone(),
        );
        match loader.load_catalog(self.config.catalog.count).await {
            Ok(catalog) => self.catalog = catalog,
            Err(e) => {
                self.catalog = Arc::new(Vec::new());
                self.notices
                    .push(Notice::new(format!("Failed to load Pokémon data. {}", e)));
            }
        }
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand pending notices to the caller, clearing them.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn details(&self) -> DetailLoader<F> {
        DetailLoader::new(Arc::clone(&self.fetcher), self.cache.clone())
    }

    /// Look up an entity by id regardless of page, loading its details.
    pub async fn entity(&self, id: u32) -> Option<Entity> {
        let summary = find_by_id(&self.catalog, id)?;
        Some(self.details().entity(summary).await)
    }

    /// A random catalog entity with its details.
    pub async fn random_entity(&self) -> Option<Entity> {
        let summary = self.catalog.choose(&mut rand::thread_rng()).cloned()?;
        debug!(id = summary.id, "revealing random entity");
        Some(self.details().entity(&summary).await)
    }

    /// One page of summaries.
    pub fn page(&self, page_index: usize) -> Page<'_, SummaryRecord> {
        get_page(self.catalog.as_slice(), page_index, self.config.catalog.page_size)
    }

    /// Entities on one catalog page, with their details loaded concurrently.
    pub async fn page_entities(&self, page_index: usize) -> Vec<Entity> {
        let page = self.page(page_index);
        let entities: Vec<Entity> = page
            .items
            .iter()
            .map(|summary| Entity::new(summary.clone(), None))
            .collect();
        self.with_details(&entities).await
    }

    /// `entities` with details loaded for every member still missing them.
    pub async fn with_details(&self, entities: &[Entity]) -> Vec<Entity> {
        let details = self.details();
        join_all(entities.iter().map(|entity| {
            let details = details.clone();
            async move {
                if entity.is_detailed() {
                    entity.clone()
                } else {
                    details.entity(&entity.summary).await
                }
            }
        }))
        .await
    }

    /// Every catalog entity with whatever details are already cached.
    pub fn entities(&self) -> Vec<Entity> {
        let details = self.details();
        self.catalog
            .iter()
            .map(|summary| details.cached_entity(summary))
            .collect()
    }

    /// Entities passing `filter`, using cached details only.
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<Entity> {
        filter.apply(&self.entities())
    }

    /// Scheduler bound to this session's cache and generation.
    pub fn background(&self) -> BackgroundScheduler<F> {
        BackgroundScheduler::new(
            self.details(),
            self.config.scheduler.chunk_size,
            self.generation.clone(),
        )
    }

    /// Fill in details for the whole catalog in the foreground.
    pub async fn warm(&self, progress: &ProgressReporter) -> ScheduleSummary {
        self.background()
            .schedule_remaining(Arc::clone(&self.catalog), progress)
            .await
    }

    /// Link that opens entity `id`.
    pub fn share_link(&self, id: u32) -> Result<String, LinkError> {
        link::share_url(&self.config.api.share_base_url, id)
    }

    /// Resolve an id or shared link against the loaded catalog.
    pub fn resolve_shared(&self, input: &str) -> Result<u32, LinkError> {
        let count = u32::try_from(self.catalog.len()).unwrap_or(u32::MAX);
        link::parse_shared_id(input, count)
    }

    /// Invalidate background work started in this session.
    pub fn teardown(&self) {
        let generation = self.generation.advance();
        info!(generation, "session torn down");
    }
}

impl<F: Fetcher + 'static> Session<F> {
    /// Start filling in details on a separate task.
    pub fn spawn_background(&self, progress: ProgressReporter) -> JoinHandle<ScheduleSummary> {
        self.background().spawn(Arc::clone(&self.catalog), progress)
    }
}
