//! LRU-K Admission Filter
//!
//! LRU-K guards a backing LRU cache against one-shot scans: a key is only
//! admitted into the main cache once it has been seen `K` times. Until then
//! it is tracked in a small history structure — an LRU of per-key access
//! counts — alongside a staging table holding the most recently seen value
//! for each not-yet-admitted key.
//!
//! # Data Structure
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         LRU-K Cache                                │
//! │                                                                     │
//! │   History (LRU of counts)        Staging           Main (LRU)      │
//! │   ┌──────────────────┐        ┌──────────┐      ┌──────────────┐   │
//! │   │ "x" -> count 1    │        │ "x" -> v │      │ "a" -> 1      │   │
//! │   │ "y" -> count 2    │   ───▶ │ "y" -> v │ ───▶ │ "b" -> 2      │   │
//! │   └──────────────────┘        └──────────┘      └──────────────┘   │
//! │   count reaches K: drop history + staging, admit into main         │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Thread Safety
//!
//! `LruKCache` is **not thread-safe**. For concurrent access, wrap it with
//! [`Sharded`](crate::Sharded) (requires the `concurrent` feature).
//!
//! # Example
//!
//! ```
//! use adaptive_cache::LruKCache;
//! use adaptive_cache::config::LruKCacheConfig;
//! use adaptive_cache::Cache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruKCacheConfig::new(
//!     NonZeroUsize::new(2).unwrap(),
//!     NonZeroUsize::new(4).unwrap(),
//!     3,
//! );
//! let mut cache = LruKCache::new(config);
//!
//! cache.put("scan", 1); // 1st sighting, stays in history
//! assert_eq!(cache.get(&"scan"), None); // 2nd sighting, still below k
//! cache.put("scan", 1); // 3rd sighting reaches k, admitted
//! assert_eq!(cache.get(&"scan"), Some(1));
//! ```

extern crate alloc;

use crate::cache::Cache;
use crate::config::{LruCacheConfig, LruKCacheConfig};
use crate::list::{Entry, List};
use crate::lru::LruCache;
use crate::metrics::{CacheMetrics, LruKCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

struct HistoryRecord<K> {
    key: K,
    count: u32,
}

/// A small bounded LRU tracking per-key access counts for keys not yet
/// admitted into the main cache.
///
/// Grounded in the same map-plus-list idiom as [`LruCache`], extended to
/// report the evicted key so the owning [`LruKCache`] can drop the matching
/// staging entry in lockstep.
struct History<K, S> {
    list: List<HistoryRecord<K>>,
    map: HashMap<K, *mut Entry<HistoryRecord<K>>, S>,
}

impl<K: Hash + Eq + Clone, S: BuildHasher> History<K, S> {
    fn with_hasher(capacity: NonZeroUsize, hasher: S) -> Self {
        let map_capacity = capacity.get().next_power_of_two();
        Self {
            list: List::new(capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hasher),
        }
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    /// Increments the count for an already-tracked key, returning the new
    /// count, or `None` if the key is not currently tracked.
    fn touch(&mut self, key: &K) -> Option<u32> {
        let node = self.map.get(key).copied()?;
        unsafe {
            self.list.move_to_front(node);
            let record = (*node).get_value_mut();
            record.count += 1;
            Some(record.count)
        }
    }

    /// Begins tracking a previously unseen key with a count of 1, evicting
    /// the least recently touched record first if the history is full.
    /// Returns the evicted key, if any.
    fn insert(&mut self, key: K) -> Option<K> {
        let mut evicted = None;
        if self.map.len() >= self.list.cap().get() {
            if let Some(old) = self.list.remove_last() {
                let old_key = unsafe { old.get_value().key.clone() };
                self.map.remove(&old_key);
                evicted = Some(old_key);
            }
        }
        let record = HistoryRecord {
            key: key.clone(),
            count: 1,
        };
        if let Some(node) = self.list.add(record) {
            self.map.insert(key, node);
        }
        evicted
    }

    /// Drops a tracked record outright, used once a key is admitted to main.
    fn remove(&mut self, key: &K) {
        if let Some(node) = self.map.remove(key) {
            unsafe {
                self.list.remove(node);
            }
        }
    }

    fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

/// An LRU-K admission filter wrapping a backing LRU cache.
///
/// A key must be observed `k` times — via `put` or `get` — before it is
/// admitted into the main cache. Until then it is tracked only in a bounded
/// history of access counts, so transient scans never displace hot entries.
///
/// # Safety
///
/// `history.map` stores raw pointers into nodes owned by `history.list`,
/// following the same invariant as [`LruCache`]: every removal path keeps
/// the map and list in lockstep.
pub struct LruKCache<K, V, S = DefaultHashBuilder> {
    config: LruKCacheConfig,
    main: LruCache<K, V, S>,
    history: History<K, S>,
    staging: HashMap<K, V, S>,
    metrics: LruKCacheMetrics,
}

// SAFETY: LruKCache owns all data; raw pointers only ever point at nodes
// owned by `history.list`. Concurrent access still requires external
// synchronization.
unsafe impl<K: Send, V: Send, S: Send> Send for LruKCache<K, V, S> {}
unsafe impl<K: Send, V: Send, S: Sync> Sync for LruKCache<K, V, S> {}

impl<K: Hash + Eq + Clone, V: Clone> LruKCache<K, V> {
    /// Creates a new LRU-K cache from a configuration using the default hasher.
    #[must_use]
    pub fn new(config: LruKCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> LruKCache<K, V, S> {
    /// Creates a new LRU-K cache from a configuration with a custom hasher.
    #[must_use]
    pub fn with_hasher(config: LruKCacheConfig, hasher: S) -> Self {
        let staging_capacity = config.history_capacity().get().next_power_of_two();
        Self {
            main: LruCache::with_hasher(
                LruCacheConfig::new(config.main_capacity()),
                hasher.clone(),
            ),
            history: History::with_hasher(config.history_capacity(), hasher.clone()),
            staging: HashMap::with_capacity_and_hasher(staging_capacity, hasher),
            metrics: LruKCacheMetrics::new(),
            config,
        }
    }

    /// Returns the maximum number of entries the main cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.main_capacity()
    }

    /// Returns the number of entries currently admitted into main.
    #[inline]
    pub fn len(&self) -> usize {
        self.main.len()
    }

    /// Returns `true` if no entries are admitted into main.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    /// Returns the number of keys currently tracked in the history structure.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Retrieves the value for the given key.
    ///
    /// If `key` is already admitted into main, it is touched and returned.
    /// Otherwise the access is recorded in history (starting a new record at
    /// count 1 if this is the first sighting); once the count reaches `k`
    /// and a staged value exists, the entry is promoted into main and
    /// returned. A key that was only ever `get`, never `put`, has nothing
    /// staged and always misses regardless of its count.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if let Some(value) = self.main.get(key) {
            let value = value.clone();
            self.metrics.record_hit();
            return Some(value);
        }

        let count = match self.history.touch(key) {
            Some(count) => count,
            None => {
                if let Some(evicted) = self.history.insert(key.clone()) {
                    self.staging.remove(&evicted);
                }
                1
            }
        };
        self.metrics.set_history_size(self.history.len());

        if count as u64 >= self.config.k() as u64 {
            if let Some(value) = self.staging.remove(key) {
                self.history.remove(key);
                self.main.put(key.clone(), value.clone());
                self.metrics.record_admission();
                self.metrics.record_hit();
                self.metrics.set_history_size(self.history.len());
                return Some(value);
            }
        }

        self.metrics.record_miss();
        None
    }

    /// Inserts a key-value pair.
    ///
    /// A key already admitted into main is overwritten and touched in place.
    /// Otherwise the access is recorded in history and the value staged;
    /// once the count reaches `k`, the staged value is admitted into main
    /// and the history/staging records for it are dropped.
    pub fn put(&mut self, key: K, value: V) {
        if self.main.get(&key).is_some() {
            self.main.put(key, value);
            return;
        }

        let count = match self.history.touch(&key) {
            Some(count) => count,
            None => {
                if let Some(evicted) = self.history.insert(key.clone()) {
                    self.staging.remove(&evicted);
                }
                1
            }
        };

        self.staging.insert(key.clone(), value);
        self.metrics.set_history_size(self.history.len());

        if count as u64 >= self.config.k() as u64 {
            if let Some(staged) = self.staging.remove(&key) {
                self.history.remove(&key);
                self.main.put(key, staged);
                self.metrics.record_admission();
                self.metrics.set_history_size(self.history.len());
            }
        }
    }

    /// Removes a key, whether admitted into main or only tracked in history.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if let Some(value) = self.main.remove(key) {
            return Some(value);
        }
        self.history.remove(key);
        self.staging.remove(key)
    }

    /// Removes every entry from both main and the history structure.
    pub fn clear(&mut self) {
        self.main.clear();
        self.history.clear();
        self.staging.clear();
        self.metrics.set_history_size(0);
    }

    /// Returns the metrics collected for this cache.
    #[inline]
    pub fn metrics_snapshot(&self) -> &LruKCacheMetrics {
        &self.metrics
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> Cache<K, V> for LruKCache<K, V, S> {
    #[inline]
    fn put(&mut self, key: K, value: V) {
        LruKCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<V> {
        LruKCache::get(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruKCache::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruKCache::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        LruKCache::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruKCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for LruKCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruKCache")
            .field("main_capacity", &self.config.main_capacity())
            .field("history_capacity", &self.config.history_capacity())
            .field("k", &self.config.k())
            .field("len", &self.main.len())
            .field("history_len", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cache<K: Hash + Eq + Clone, V: Clone>(
        main_cap: usize,
        history_cap: usize,
        k: u32,
    ) -> LruKCache<K, V> {
        LruKCache::new(LruKCacheConfig::new(
            NonZeroUsize::new(main_cap).unwrap(),
            NonZeroUsize::new(history_cap).unwrap(),
            k,
        ))
    }

    #[test]
    fn single_access_does_not_admit() {
        let mut cache = make_cache(2, 4, 3);
        cache.put("scan", 1);
        assert_eq!(cache.get(&"scan"), None); // 2 sightings total, still below k=3
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn kth_access_admits_into_main() {
        let mut cache = make_cache(2, 4, 2);
        cache.put("hot", 1);
        cache.put("hot", 1);
        assert_eq!(cache.get(&"hot"), Some(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn admitted_key_overwrites_in_place() {
        let mut cache = make_cache(2, 4, 2);
        cache.put("hot", 1);
        cache.put("hot", 2); // admitted on the 2nd put
        cache.put("hot", 3); // overwrite in main
        assert_eq!(cache.get(&"hot"), Some(3));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_accumulates_toward_admission() {
        let mut cache = make_cache(2, 4, 3);
        cache.put("hot", 1);
        assert_eq!(cache.get(&"hot"), None); // 2nd sighting, still below k
        assert_eq!(cache.get(&"hot"), Some(1)); // 3rd sighting, admitted
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn history_eviction_drops_staged_value() {
        let mut cache = make_cache(4, 1, 3);
        cache.put("a", 1);
        cache.put("b", 2); // evicts "a" from the single-slot history
        assert_eq!(cache.history_len(), 1);
        cache.put("a", 10); // "a" restarts from count 1 (its earlier progress is gone)
        assert_eq!(cache.get(&"a"), None); // 2nd sighting post-reset, still below k=3
    }

    #[test]
    fn remove_clears_both_main_and_history() {
        let mut cache = make_cache(2, 4, 2);
        cache.put("hot", 1);
        cache.put("hot", 1); // admitted
        assert_eq!(cache.remove(&"hot"), Some(1));
        assert_eq!(cache.get(&"hot"), None);

        cache.put("cold", 5);
        assert_eq!(cache.remove(&"cold"), Some(5));
        assert_eq!(cache.history_len(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut cache = make_cache(2, 4, 2);
        cache.put("hot", 1);
        cache.put("hot", 1);
        cache.put("cold", 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.history_len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn metrics_report_admissions_and_algorithm_name() {
        let mut cache = make_cache(2, 4, 2);
        cache.put("hot", 1);
        cache.put("hot", 1);
        let metrics = cache.metrics();
        assert_eq!(metrics["admissions"], 1.0);
        assert_eq!(cache.algorithm_name(), "LRU-K");
    }

    #[test]
    fn cache_trait_object_usage() {
        fn exercise<C: Cache<&'static str, i32>>(cache: &mut C) {
            cache.put("a", 1);
            cache.put("a", 1);
            assert_eq!(cache.get(&"a"), Some(1));
            assert_eq!(cache.remove(&"a"), Some(1));
            assert_eq!(cache.len(), 0);
        }

        let mut cache: LruKCache<&'static str, i32> = make_cache(4, 8, 2);
        exercise(&mut cache);
    }
}
