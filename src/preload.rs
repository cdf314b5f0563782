//! Priority preloading of media for a few critical entities.
//!
//! Every image, shiny image and cry for the critical set is requested at
//! once and the batch waits for all of them. An asset that errors or runs
//! past the per-asset timeout resolves as `Failed`; it never aborts the batch
//! and never leaves it waiting. Skipping the preload changes latency only.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::api::{Endpoints, Fetcher};
use crate::config::CriticalEntry;
use crate::error::{FetchError, LoadError};

/// Which media file an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    ShinyImage,
    Cry,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Image, AssetKind::ShinyImage, AssetKind::Cry];

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::ShinyImage => "shiny image",
            AssetKind::Cry => "cry",
        }
    }
}

/// Resolution of one asset request. Both variants unblock the batch.
#[derive(Debug)]
pub enum AssetStatus {
    Ready,
    Failed(LoadError),
}

impl AssetStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetStatus::Ready)
    }
}

/// One requested asset and how it resolved.
#[derive(Debug)]
pub struct AssetOutcome {
    pub id: u32,
    pub kind: AssetKind,
    pub url: String,
    pub status: AssetStatus,
}

/// Everything a preload batch requested.
#[derive(Debug, Default)]
pub struct PreloadReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl PreloadReport {
    pub fn ready_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_ready()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.ready_count()
    }

    /// Whether every asset for `id` loaded.
    pub fn is_warm(&self, id: u32) -> bool {
        let mut assets = self.outcomes.iter().filter(|o| o.id == id).peekable();
        assets.peek().is_some() && assets.all(|o| o.status.is_ready())
    }
}

/// Requests critical media ahead of the catalog.
pub struct PriorityPreloader<F: Fetcher> {
    fetcher: Arc<F>,
    endpoints: Endpoints,
    asset_timeout: Duration,
}

impl<F: Fetcher> PriorityPreloader<F> {
    pub fn new(fetcher: Arc<F>, endpoints: Endpoints, asset_timeout: Duration) -> Self {
        Self {
            fetcher,
            endpoints,
            asset_timeout,
        }
    }

    /// Request all assets of the critical set concurrently.
    ///
    /// Completes once every asset has resolved, in request order.
    pub async fn preload_critical(&self, critical: &[CriticalEntry]) -> PreloadReport {
        let requests = critical.iter().flat_map(move |entry| {
            AssetKind::ALL
                .into_iter()
                .map(move |kind| (entry.id, kind, self.asset_url(entry, kind)))
        });

        let outcomes = join_all(requests.map(|(id, kind, url)| async move {
            let status = self.request(&url).await;
            AssetOutcome {
                id,
                kind,
                url,
                status,
            }
        }))
        .await;

        let report = PreloadReport { outcomes };
        debug!(
            ready = report.ready_count(),
            failed = report.failed_count(),
            "critical preload finished"
        );
        report
    }

    fn asset_url(&self, entry: &CriticalEntry, kind: AssetKind) -> String {
        match kind {
            AssetKind::Image => self.endpoints.image(entry.id),
            AssetKind::ShinyImage => self.endpoints.shiny_image(entry.id),
            AssetKind::Cry => self.endpoints.cry(&entry.name),
        }
    }

    async fn request(&self, url: &str) -> AssetStatus {
        let result = match tokio::time::timeout(self.asset_timeout, self.fetcher.probe(url)).await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: url.to_string(),
                timeout_ms: self.asset_timeout.as_millis() as u64,
            }),
        };

        match result {
            Ok(()) => AssetStatus::Ready,
            Err(e) => {
                warn!(url, error = %e, "asset preload failed");
                AssetStatus::Failed(LoadError::asset(&e))
            }
        }
    }
}
