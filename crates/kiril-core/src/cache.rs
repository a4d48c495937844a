//! Bounded memoization of forward transliterations.
//!
//! Entries are evicted in insertion order (FIFO), not by recency of use.
//! The cache only ever holds derived data: dropping it at any point changes
//! performance, never results.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing::debug;

use crate::forward::TransliterationOptions;
use crate::settings::settings;

/// Default capacity, matching `cache.max_entries` in the default settings.
pub const MAX_CACHE_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    input: String,
    options: TransliterationOptions,
}

impl CacheKey {
    pub fn new(input: &str, options: TransliterationOptions) -> Self {
        Self {
            input: input.to_string(),
            options,
        }
    }
}

pub struct TransliterationCache {
    capacity: usize,
    map: HashMap<CacheKey, String>,
    order: VecDeque<CacheKey>,
}

impl TransliterationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Insert a result, dropping the oldest entries to stay within capacity.
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: CacheKey, value: String) {
        if self.capacity == 0 || self.map.contains_key(&key) {
            return;
        }
        while self.map.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.map.remove(&oldest);
            debug!(evicted_len = oldest.input.len(), "cache evict");
        }
        self.order.push_back(key.clone());
        self.map.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}

/// Lock the process-wide cache, sized from `cache.max_entries`.
///
/// A poisoned lock is recovered: a panic mid-insert can at worst leave an
/// entry missing from `order`, which only delays its eviction.
pub(crate) fn global_cache() -> MutexGuard<'static, TransliterationCache> {
    static INSTANCE: OnceLock<Mutex<TransliterationCache>> = OnceLock::new();
    INSTANCE
        .get_or_init(|| Mutex::new(TransliterationCache::new(settings().cache.max_entries)))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Number of entries currently held by the process-wide cache.
pub fn cache_len() -> usize {
    global_cache().len()
}

/// Capacity of the process-wide cache.
pub fn cache_capacity() -> usize {
    global_cache().capacity()
}
