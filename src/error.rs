//! Error types for the loading pipeline.
//!
//! Two layers:
//! - `FetchError` - what the network boundary reports (transport, status, decode)
//! - `LoadError` - what a loader reports once it has caught a fetch failure
//!
//! Loaders never let a `FetchError` escape into the scheduler or the
//! front-end. Each one converts it at its own boundary: the catalog loader
//! returns `CatalogUnavailable`, the detail loader logs `DetailUnavailable`
//! and yields `None`, the preloader records `AssetUnavailable` as a failed
//! asset and keeps going.

use thiserror::Error;

/// Result type for fetcher operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure at the network boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// No response within the allowed time.
    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },
}

impl FetchError {
    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Timeout { url, .. } => url,
        }
    }
}

/// Failure reported by a loader after catching a fetch error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The master list could not be fetched or parsed.
    #[error("Pokédex catalog is unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    /// A single entity's details could not be fetched or normalized.
    #[error("details for #{id:03} are unavailable: {reason}")]
    DetailUnavailable { id: u32, reason: String },

    /// An image or audio asset failed to load.
    #[error("asset {url} is unavailable: {reason}")]
    AssetUnavailable { url: String, reason: String },
}

impl LoadError {
    pub fn catalog(error: &FetchError) -> Self {
        LoadError::CatalogUnavailable {
            reason: error.to_string(),
        }
    }

    pub fn detail(id: u32, reason: impl Into<String>) -> Self {
        LoadError::DetailUnavailable {
            id,
            reason: reason.into(),
        }
    }

    pub fn asset(error: &FetchError) -> Self {
        LoadError::AssetUnavailable {
            url: error.url().to_string(),
            reason: error.to_string(),
        }
    }
}
