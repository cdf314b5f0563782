//! Network boundary for the loaders.
//!
//! Every request the crate makes goes through a `Fetcher`. The loaders are
//! generic over it, so the same catalog, detail, preload and scheduler code
//! runs against PokeAPI (`HttpFetcher`) or an in-process table
//! (`MemoryFetcher`).
//!
//! # Design
//!
//! The `Fetcher` trait has two operations: `get_json` for API records and
//! `probe` for media assets, where only success or failure matters.
//! Implementations must be `Send + Sync` because one fetcher is shared by
//! the foreground session and the background scheduler task.

mod endpoints;
mod http;
mod memory;
pub mod wire;

pub use endpoints::Endpoints;
pub use http::HttpFetcher;
pub use memory::MemoryFetcher;

use std::future::Future;

use serde_json::Value;

use crate::error::FetchResult;

/// Strategy for issuing requests.
pub trait Fetcher: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Fetch a URL and decode its body as JSON.
    fn get_json(&self, url: &str) -> impl Future<Output = FetchResult<Value>> + Send;

    /// Request an asset and discard the body.
    ///
    /// Resolves `Ok` once the asset has loaded, `Err` if it could not be.
    fn probe(&self, url: &str) -> impl Future<Output = FetchResult<()>> + Send;
}
