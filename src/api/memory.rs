//! In-process fetcher serving canned responses.
//!
//! Used for offline runs and tests: routes map exact URLs to JSON bodies,
//! assets, failures, or requests that never complete. Every request is
//! recorded so callers can assert how many network calls a loader made.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;

use super::Fetcher;
use crate::error::{FetchError, FetchResult};

#[derive(Debug, Clone)]
enum Route {
    Json(Value),
    Asset,
    Fail(u16),
    Hang,
}

/// Fetcher backed by a URL table.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    routes: Mutex<HashMap<String, Route>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn insert_json(&self, url: impl Into<String>, body: Value) {
        lock(&self.routes).insert(url.into(), Route::Json(body));
    }

    /// Treat `url` as a loadable asset.
    pub fn insert_asset(&self, url: impl Into<String>) {
        lock(&self.routes).insert(url.into(), Route::Asset);
    }

    /// Answer `url` with an error status.
    pub fn fail(&self, url: impl Into<String>, status: u16) {
        lock(&self.routes).insert(url.into(), Route::Fail(status));
    }

    /// Never answer `url`.
    pub fn hang(&self, url: impl Into<String>) {
        lock(&self.routes).insert(url.into(), Route::Hang);
    }

    /// Hold the response for `url` back by `delay`.
    pub fn delay(&self, url: impl Into<String>, delay: Duration) {
        lock(&self.delays).insert(url.into(), delay);
    }

    /// Every URL requested so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        lock(&self.calls).iter().filter(|u| *u == url).count()
    }

    pub fn total_calls(&self) -> usize {
        lock(&self.calls).len()
    }

    async fn resolve(&self, url: &str) -> FetchResult<Route> {
        lock(&self.calls).push(url.to_string());
        let route = lock(&self.routes).get(url).cloned();
        let delay = lock(&self.delays).get(url).copied();

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match route {
            Some(Route::Fail(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(Route::Hang) => std::future::pending().await,
            Some(route) => Ok(route),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

impl Fetcher for MemoryFetcher {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        match self.resolve(url).await? {
            Route::Json(body) => Ok(body),
            _ => Err(FetchError::Decode {
                url: url.to_string(),
                message: "not a JSON resource".to_string(),
            }),
        }
    }

    async fn probe(&self, url: &str) -> FetchResult<()> {
        self.resolve(url).await.map(|_| ())
    }
}
