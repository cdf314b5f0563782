//! Insertion-ordered memo with an optional soft capacity.
//!
//! Values are written once per key in practice; a repeated `set` replaces
//! the value but keeps the key's original insertion position. When a
//! capacity is configured, `set` prunes the oldest-inserted keys until the
//! cache is back within bounds. Reads never change eviction order: this is
//! a simple bound, not a working-set cache.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Keyed memo of fetched records.
#[derive(Debug)]
pub struct RecordCache<K, V> {
    /// Cached entries (key -> value)
    entries: HashMap<K, V>,
    /// Insertion order (front = oldest, back = newest)
    insertion_order: VecDeque<K>,
    /// Maximum number of entries, `None` for unbounded
    capacity: Option<usize>,
}

impl<K, V> Default for RecordCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<K, V> RecordCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache, bounded when `capacity` is set.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            // A zero bound would evict every insert immediately
            capacity: capacity.map(|c| c.max(1)),
        }
    }

    /// Create a cache that never evicts.
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Create a cache holding at most `capacity` entries.
    pub fn bounded(capacity: usize) -> Self {
        Self::new(Some(capacity))
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Get a value, or `None` if the key was never stored or was evicted.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a value, pruning oldest-inserted entries beyond capacity.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return;
        }

        self.entries.insert(key.clone(), value);
        self.insertion_order.push_back(key);
        self.prune();
    }

    /// Remove a key so the next access fetches it again.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.insertion_order.retain(|k| k != key);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.insertion_order.iter()
    }

    fn prune(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };

        while self.entries.len() > capacity {
            match self.insertion_order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }
}
