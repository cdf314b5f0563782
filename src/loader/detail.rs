//! Detail loading: one fetch per entity, normalized and memoized.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::wire::PokemonPayload;
use crate::api::Fetcher;
use crate::error::LoadError;
use crate::model::{DetailRecord, Entity, Stat, SummaryRecord};
use crate::record_cache::SharedCache;

/// API heights and weights are in tenths of the display unit.
const DECI_UNITS: f64 = 10.0;

/// Fetches and memoizes detail records.
pub struct DetailLoader<F: Fetcher> {
    fetcher: Arc<F>,
    cache: SharedCache,
}

impl<F: Fetcher> Clone for DetailLoader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            cache: self.cache.clone(),
        }
    }
}

impl<F: Fetcher> DetailLoader<F> {
    pub fn new(fetcher: Arc<F>, cache: SharedCache) -> Self {
        Self { fetcher, cache }
    }

    /// Details for `summary`, or `None` if they could not be loaded.
    ///
    /// Failures are logged and never cached; callers keep showing the
    /// summary and a later call tries the network again.
    pub async fn load_details(&self, summary: &SummaryRecord) -> Option<Arc<DetailRecord>> {
        match self.try_load_details(summary).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!(id = summary.id, error = %e, "detail load failed");
                None
            }
        }
    }

    /// Like `load_details`, but hands the failure back to the caller.
    pub async fn try_load_details(
        &self,
        summary: &SummaryRecord,
    ) -> Result<Arc<DetailRecord>, LoadError> {
        if let Some(details) = self.cache.detail(summary.id) {
            debug!(id = summary.id, "details served from cache");
            return Ok(details);
        }

        debug!(id = summary.id, fetcher = self.fetcher.name(), "fetching details");
        let body = self
            .fetcher
            .get_json(&summary.details_ref)
            .await
            .map_err(|e| LoadError::detail(summary.id, e.to_string()))?;
        let payload: PokemonPayload = serde_json::from_value(body)
            .map_err(|e| LoadError::detail(summary.id, format!("unexpected payload: {}", e)))?;
        let details = normalize(payload).map_err(|reason| LoadError::detail(summary.id, reason))?;

        Ok(self.cache.insert_detail(summary.id, Arc::new(details)))
    }

    /// Details already in the cache, without touching the network.
    pub fn cached(&self, id: u32) -> Option<Arc<DetailRecord>> {
        self.cache.detail(id)
    }

    /// The summary paired with whatever details can be loaded for it.
    pub async fn entity(&self, summary: &SummaryRecord) -> Entity {
        let details = self.load_details(summary).await;
        Entity::new(summary.clone(), details)
    }

    /// The summary paired with cached details only.
    pub fn cached_entity(&self, summary: &SummaryRecord) -> Entity {
        Entity::new(summary.clone(), self.cached(summary.id))
    }
}

/// Convert the API payload into a detail record.
pub fn normalize(payload: PokemonPayload) -> Result<DetailRecord, String> {
    if payload.types.is_empty() {
        return Err("response lists no types".to_string());
    }

    Ok(DetailRecord {
        types: payload.types.into_iter().map(|t| t.kind.name).collect(),
        stats: payload
            .stats
            .into_iter()
            .map(|s| Stat {
                name: s.stat.name,
                base: s.base_stat,
            })
            .collect(),
        height: f64::from(payload.height) / DECI_UNITS,
        weight: f64::from(payload.weight) / DECI_UNITS,
        abilities: payload
            .abilities
            .into_iter()
            .map(|a| a.ability.name)
            .collect(),
        moves: payload.moves.into_iter().map(|m| m.move_.name).collect(),
    })
}
