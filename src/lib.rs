//! pokedeck library
//!
//! Incremental loading and session caching for a Pokédex backed by PokeAPI:
//! critical media is warmed first, the catalog is fetched once, details are
//! filled in chunk by chunk in the background, and pages are sliced on demand.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod link;
pub mod loader;
pub mod model;
pub mod pagination;
pub mod preload;
pub mod record_cache;
pub mod scheduler;
pub mod session;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{Endpoints, Fetcher, HttpFetcher, MemoryFetcher};
pub use config::Config;
pub use error::{FetchError, LoadError};
pub use filter::CatalogFilter;
pub use model::{DetailRecord, Entity, SummaryRecord};
pub use pagination::{get_page, Page, PageCursor};
pub use record_cache::{RecordCache, SharedCache};
pub use scheduler::{BackgroundScheduler, ProgressReporter, ScheduleSummary};
pub use session::{Notice, Session};
