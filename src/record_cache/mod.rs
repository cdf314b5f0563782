//! Session record cache
//!
//! Re-exports the generic `RecordCache<K, V>` and provides `SharedCache`,
//! the handle loaders use to memoize the catalog list and detail records.

pub mod cache;

pub use cache::RecordCache;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::{DetailRecord, SummaryRecord};

/// Default soft bound used when a capacity is enabled without a value.
pub const DEFAULT_CAPACITY: usize = 50;

/// Record kind plus identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The summary list fetched with `limit=count`
    List(u32),
    /// Detail record for one id
    Detail(u32),
    /// Type names for the filter control
    Types,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::List(count) => write!(f, "list:{}", count),
            CacheKey::Detail(id) => write!(f, "detail:{}", id),
            CacheKey::Types => write!(f, "types"),
        }
    }
}

/// Value stored under a `CacheKey`.
#[derive(Debug, Clone)]
pub enum CachedRecord {
    List(Arc<Vec<SummaryRecord>>),
    Detail(Arc<DetailRecord>),
    Types(Arc<Vec<String>>),
}

/// Cache specialized for session records.
pub type SessionCache = RecordCache<CacheKey, CachedRecord>;

/// Cloneable handle to the session cache.
///
/// Every loader and the background scheduler hold a clone. Writes go
/// through a single mutex and no guard is ever held across an await.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<SessionCache>>,
}

impl SharedCache {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RecordCache::new(capacity))),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    fn lock(&self) -> MutexGuard<'_, SessionCache> {
        // The cache holds plain data; a panic mid-write leaves it usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn has(&self, key: CacheKey) -> bool {
        self.lock().has(&key)
    }

    pub fn get(&self, key: CacheKey) -> Option<CachedRecord> {
        self.lock().get(&key).cloned()
    }

    pub fn set(&self, key: CacheKey, value: CachedRecord) {
        self.lock().set(key, value);
    }

    pub fn list(&self, count: u32) -> Option<Arc<Vec<SummaryRecord>>> {
        match self.get(CacheKey::List(count)) {
            Some(CachedRecord::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn set_list(&self, count: u32, list: Arc<Vec<SummaryRecord>>) {
        self.set(CacheKey::List(count), CachedRecord::List(list));
    }

    pub fn detail(&self, id: u32) -> Option<Arc<DetailRecord>> {
        match self.get(CacheKey::Detail(id)) {
            Some(CachedRecord::Detail(details)) => Some(details),
            _ => None,
        }
    }

    pub fn set_detail(&self, id: u32, details: Arc<DetailRecord>) {
        self.set(CacheKey::Detail(id), CachedRecord::Detail(details));
    }

    /// Store `details` unless another task stored a record for `id` first.
    ///
    /// Returns whichever record ends up cached, so concurrent loads of the
    /// same id all observe a single record.
    pub fn insert_detail(&self, id: u32, details: Arc<DetailRecord>) -> Arc<DetailRecord> {
        let mut cache = self.lock();
        if let Some(CachedRecord::Detail(existing)) = cache.get(&CacheKey::Detail(id)) {
            return Arc::clone(existing);
        }
        cache.set(CacheKey::Detail(id), CachedRecord::Detail(Arc::clone(&details)));
        details
    }

    pub fn types(&self) -> Option<Arc<Vec<String>>> {
        match self.get(CacheKey::Types) {
            Some(CachedRecord::Types(types)) => Some(types),
            _ => None,
        }
    }

    pub fn set_types(&self, types: Arc<Vec<String>>) {
        self.set(CacheKey::Types, CachedRecord::Types(types));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
