//! Catalog loading: the master list of summaries, fetched once per session.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::wire::NamedResourceList;
use crate::api::{Endpoints, Fetcher};
use crate::error::{FetchError, LoadError};
use crate::model::{display_name, SummaryRecord};
use crate::record_cache::SharedCache;

/// Shared, immutable summary list.
pub type Catalog = Arc<Vec<SummaryRecord>>;

/// Fetches and memoizes the summary list.
pub struct CatalogLoader<F: Fetcher> {
    fetcher: Arc<F>,
    cache: SharedCache,
    endpoints: Endpoints,
}

impl<F: Fetcher> CatalogLoader<F> {
    pub fn new(fetcher: Arc<F>, cache: SharedCache, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            cache,
            endpoints,
        }
    }

    /// Load the first `count` summaries.
    ///
    /// Served from the cache after the first success; a failure caches
    /// nothing, so the next call goes back to the network.
    pub async fn load_catalog(&self, count: u32) -> Result<Catalog, LoadError> {
        if let Some(catalog) = self.cache.list(count) {
            debug!(count, "catalog served from cache");
            return Ok(catalog);
        }

        let url = self.endpoints.catalog(count);
        debug!(count, fetcher = self.fetcher.name(), "fetching catalog");
        let catalog = match self.fetch(&url, count).await {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                return Err(LoadError::catalog(&e));
            }
        };

        info!(entries = catalog.len(), "catalog loaded");
        self.cache.set_list(count, Arc::clone(&catalog));
        Ok(catalog)
    }

    async fn fetch(&self, url: &str, count: u32) -> Result<Vec<SummaryRecord>, FetchError> {
        let body = self.fetcher.get_json(url).await?;
        let list: NamedResourceList =
            serde_json::from_value(body).map_err(|e| FetchError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(list
            .results
            .into_iter()
            .take(count as usize)
            .zip(1u32..)
            .map(|(resource, id)| self.summarize(id, &resource.name, resource.url))
            .collect())
    }

    /// Derive a summary from the entry's 1-based position and API name.
    fn summarize(&self, id: u32, api_name: &str, details_ref: Option<String>) -> SummaryRecord {
        SummaryRecord {
            id,
            name: display_name(api_name),
            image_url: self.endpoints.image(id),
            shiny_image_url: self.endpoints.shiny_image(id),
            cry_url: self.endpoints.cry(api_name),
            cry_fallback_url: self.endpoints.cry_fallback(api_name),
            details_ref: details_ref.unwrap_or_else(|| self.endpoints.detail(id)),
        }
    }
}

/// Find an entity by id regardless of which page it sits on.
pub fn find_by_id(catalog: &[SummaryRecord], id: u32) -> Option<&SummaryRecord> {
    // Ids are 1-based positions, so the direct index is almost always right
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    match catalog.get(index) {
        Some(summary) if summary.id == id => Some(summary),
        _ => catalog.iter().find(|s| s.id == id),
    }
}
