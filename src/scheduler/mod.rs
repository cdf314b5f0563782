//! Background detail loading, chunk by chunk.
//!
//! After the catalog is available the scheduler walks it in fixed-size
//! contiguous chunks. Each chunk's detail requests are issued together and
//! joined before the next chunk starts, which bounds in-flight requests to
//! one chunk's width instead of the whole catalog.
//!
//! # Design
//!
//! - Requests go through the `DetailLoader`, so cached entities cost nothing
//! - A failed entity is counted and skipped; it never stops the run
//! - Progress is reported after every chunk as a rounded percentage
//! - The run holds a generation `Ticket`; once the session advances it stops
//!   before the next chunk and reports nothing further
//! - Control is yielded back to the runtime between chunks

mod chunk;
mod generation;
mod progress;

pub use chunk::{chunk_count, partition, Chunk};
pub use generation::{Generation, Ticket};
pub use progress::{percent, Progress, ProgressReporter, ProgressWatcher};

use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::Fetcher;
use crate::loader::{Catalog, DetailLoader};

/// Outcome of one background run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total_chunks: usize,
    pub chunks_completed: usize,
    /// Entities whose details are now cached
    pub loaded: usize,
    /// Entities whose detail fetch failed
    pub failed: usize,
    /// The run stopped because its generation went stale
    pub cancelled: bool,
}

/// Fills in details for the whole catalog in the background.
pub struct BackgroundScheduler<F: Fetcher> {
    details: DetailLoader<F>,
    chunk_size: usize,
    generation: Generation,
}

impl<F: Fetcher> BackgroundScheduler<F> {
    pub fn new(details: DetailLoader<F>, chunk_size: usize, generation: Generation) -> Self {
        Self {
            details,
            chunk_size: chunk_size.max(1),
            generation,
        }
    }

    /// Walk `catalog` chunk by chunk, reporting into `progress`.
    pub async fn schedule_remaining(
        &self,
        catalog: Catalog,
        progress: &ProgressReporter,
    ) -> ScheduleSummary {
        let ticket = self.generation.ticket();
        let chunks = partition(catalog.len(), self.chunk_size);
        let mut summary = ScheduleSummary {
            total_chunks: chunks.len(),
            ..ScheduleSummary::default()
        };
        progress.start(chunks.len());

        for chunk in chunks {
            if !ticket.is_current() {
                summary.cancelled = true;
                break;
            }

            let members = &catalog[chunk.range.clone()];
            let results = join_all(members.iter().map(|s| self.details.load_details(s))).await;
            let loaded = results.iter().filter(|r| r.is_some()).count();

            // Results that land after teardown are dropped unreported
            if !ticket.is_current() {
                summary.cancelled = true;
                break;
            }

            summary.loaded += loaded;
            summary.failed += results.len() - loaded;
            summary.chunks_completed += 1;
            let snapshot = progress.chunk_completed();
            debug!(
                chunk = chunk.id,
                loaded,
                percent = snapshot.percent,
                "background chunk finished"
            );

            tokio::task::yield_now().await;
        }

        info!(
            chunks = summary.chunks_completed,
            loaded = summary.loaded,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "background detail loading stopped"
        );
        summary
    }
}

impl<F: Fetcher + 'static> BackgroundScheduler<F> {
    /// Run `schedule_remaining` on its own task so the caller is never blocked.
    pub fn spawn(self, catalog: Catalog, progress: ProgressReporter) -> JoinHandle<ScheduleSummary> {
        tokio::spawn(async move { self.schedule_remaining(catalog, &progress).await })
    }
}
