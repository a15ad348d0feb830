//! Adaptive Replacement Cache (ARC)
//!
//! ARC blends recency and frequency by keeping two resident lists — T1 for
//! entries seen once (LRU-like) and T2 for entries seen more than once
//! (LFU-like) — backed by two key-only ghost lists, B1 and B2, that record
//! what was recently evicted from each. A hit against a ghost list is taken
//! as a signal that the corresponding resident list was too small, and
//! shifts one unit of capacity from its sibling.
//!
//! # Data Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            ARC Cache                              │
//! │                                                                   │
//! │   B1 (ghost)   T1 (recency)      T2 (frequency)   B2 (ghost)      │
//! │   ┌────────┐   ┌───────────┐     ┌───────────┐    ┌────────┐     │
//! │   │ key   │◀──│ key -> val │ ──▶ │ key -> val │──▶│ key    │     │
//! │   └────────┘   └───────────┘     └───────────┘    └────────┘     │
//! │   ghost hit on B1 grows c1 (steals from c2); B2 grows c2          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A T1 entry promoted into T2 after `transformThreshold` accesses is *not*
//! removed from T1 — it ages out of T1 naturally like any other entry,
//! while T2 holds the promoted copy going forward.
//!
//! # Thread Safety
//!
//! `ArcCache` is **not thread-safe**. For concurrent access, wrap it with
//! [`Sharded`](crate::Sharded) (requires the `concurrent` feature).
//!
//! # Example
//!
//! ```
//! use adaptive_cache::ArcCache;
//! use adaptive_cache::config::ArcCacheConfig;
//! use adaptive_cache::Cache;
//! use core::num::NonZeroUsize;
//!
//! let config = ArcCacheConfig::new(NonZeroUsize::new(2).unwrap());
//! let mut cache = ArcCache::new(config);
//!
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(1)); // promoted into T2 (default threshold 2)
//! ```

extern crate alloc;

use crate::cache::Cache;
use crate::config::ArcCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{Entry, List};
use crate::metrics::{ArcCacheMetrics, CacheMetrics};
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

/// A resident list (T1 or T2): a map-plus-list of live entries.
///
/// Its backing [`List`] is sized for `2 * capacity` since a single segment's
/// logical cap can grow to the full `2C` conserved total when the other
/// segment's share shrinks to zero.
struct ArcSegment<K, V, S> {
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, *mut Entry<CacheEntry<K, V>>, S>,
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> ArcSegment<K, V, S> {
    fn with_hasher(list_capacity: NonZeroUsize, hasher: S) -> Self {
        let map_capacity = list_capacity.get().next_power_of_two();
        Self {
            list: List::new(list_capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hasher),
        }
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Moves a resident entry to the front and records an access, returning
    /// its value and the new access count.
    fn access(&mut self, key: &K) -> Option<(V, u64)> {
        let node = self.map.get(key).copied()?;
        unsafe {
            self.list.move_to_front(node);
            let entry = (*node).get_value_mut();
            let count = entry.touch();
            Some((entry.value.clone(), count))
        }
    }

    /// Replaces the value of a resident entry in place, without touching
    /// its access count or position.
    fn update_value(&mut self, key: &K, value: V) {
        if let Some(&node) = self.map.get(key) {
            unsafe {
                (*node).get_value_mut().value = value;
            }
        }
    }

    /// Replaces the value of a resident entry, moving it to the front and
    /// recording an access.
    fn update_value_and_touch(&mut self, key: &K, value: V) {
        if let Some(&node) = self.map.get(key) {
            unsafe {
                self.list.move_to_front(node);
                let entry = (*node).get_value_mut();
                entry.value = value;
                entry.touch();
            }
        }
    }

    /// Inserts a brand new entry at the front. The caller is responsible for
    /// having made room first.
    fn insert_front(&mut self, key: K, value: V) {
        let entry = CacheEntry::new(key.clone(), value);
        if let Some(node) = self.list.add(entry) {
            self.map.insert(key, node);
        }
    }

    /// Evicts the least recently used entry, if any.
    fn evict_last(&mut self) -> Option<(K, V)> {
        let boxed = self.list.remove_last()?;
        let (key, value) = unsafe {
            let entry = boxed.get_value();
            (entry.key.clone(), entry.value.clone())
        };
        self.map.remove(&key);
        Some((key, value))
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.map.remove(key)?;
        unsafe {
            let boxed = self.list.remove(node)?;
            Some(boxed.get_value().value.clone())
        }
    }

    fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

/// A key-only ghost list (B1 or B2): remembers what was recently evicted.
struct GhostList<K, S> {
    list: List<K>,
    map: HashMap<K, *mut Entry<K>, S>,
}

impl<K: Hash + Eq + Clone, S: BuildHasher> GhostList<K, S> {
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

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn remove(&mut self, key: &K) {
        if let Some(node) = self.map.remove(key) {
            unsafe {
                self.list.remove(node);
            }
        }
    }

    /// Records a key as recently evicted, discarding the oldest ghost
    /// outright if the list is already full.
    fn insert(&mut self, key: K) {
        if let Some(&node) = self.map.get(&key) {
            unsafe {
                self.list.move_to_front(node);
            }
            return;
        }
        if self.map.len() >= self.list.cap().get() {
            if let Some(old) = self.list.remove_last() {
                let old_key = unsafe { old.get_value().clone() };
                self.map.remove(&old_key);
            }
        }
        if let Some(node) = self.list.add(key.clone()) {
            self.map.insert(key, node);
        }
    }

    fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

/// An Adaptive Replacement Cache.
///
/// Balances recency (T1) against frequency (T2) by watching hits against
/// two ghost lists (B1, B2) of recently evicted keys and shifting capacity
/// toward whichever resident list is losing entries it shouldn't.
///
/// # Safety
///
/// Each segment's map stores raw pointers into nodes owned by its own list;
/// every removal path keeps a segment's map and list in lockstep, and no
/// pointer is ever shared across segments.
pub struct ArcCache<K, V, S = DefaultHashBuilder> {
    config: ArcCacheConfig,
    c1: usize,
    c2: usize,
    t1: ArcSegment<K, V, S>,
    t2: ArcSegment<K, V, S>,
    b1: GhostList<K, S>,
    b2: GhostList<K, S>,
    metrics: ArcCacheMetrics,
}

// SAFETY: ArcCache owns all data; raw pointers only ever point at nodes
// owned by the segment/ghost list that created them. Concurrent access
// still requires external synchronization.
unsafe impl<K: Send, V: Send, S: Send> Send for ArcCache<K, V, S> {}
unsafe impl<K: Send, V: Send, S: Sync> Sync for ArcCache<K, V, S> {}

impl<K: Hash + Eq + Clone, V: Clone> ArcCache<K, V> {
    /// Creates a new ARC cache from a configuration using the default hasher.
    #[must_use]
    pub fn new(config: ArcCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> ArcCache<K, V, S> {
    /// Creates a new ARC cache from a configuration with a custom hasher.
    #[must_use]
    pub fn with_hasher(config: ArcCacheConfig, hasher: S) -> Self {
        let capacity = config.capacity();
        let resident_list_capacity =
            NonZeroUsize::new(capacity.get().saturating_mul(2)).unwrap();
        Self {
            c1: capacity.get(),
            c2: capacity.get(),
            t1: ArcSegment::with_hasher(resident_list_capacity, hasher.clone()),
            t2: ArcSegment::with_hasher(resident_list_capacity, hasher.clone()),
            b1: GhostList::with_hasher(capacity, hasher.clone()),
            b2: GhostList::with_hasher(capacity, hasher),
            metrics: ArcCacheMetrics::new(),
            config,
        }
    }

    /// Returns the per-sub-cache capacity `C` from the configuration.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity()
    }

    /// Returns the number of entries currently resident across T1 and T2.
    #[inline]
    pub fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    /// Returns `true` if no entries are resident in either T1 or T2.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns T1's current logical capacity.
    #[inline]
    pub fn c1(&self) -> usize {
        self.c1
    }

    /// Returns T2's current logical capacity.
    #[inline]
    pub fn c2(&self) -> usize {
        self.c2
    }

    /// Retrieves the value for the given key.
    ///
    /// A ghost-list hit is resolved first, rebalancing `c1`/`c2`. A T1 hit
    /// is touched and, once its access count reaches the transform
    /// threshold, copied into T2 without removing it from T1. A T2 hit
    /// updates its internal access count.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.rebalance_ghosts(key);

        if let Some((value, count)) = self.t1.access(key) {
            self.metrics.record_hit();
            if count >= self.config.transform_threshold() {
                self.promote_to_t2(key, &value);
            }
            self.sync_metrics_lengths();
            return Some(value);
        }

        if let Some((value, _)) = self.t2.access(key) {
            self.metrics.record_hit();
            self.sync_metrics_lengths();
            return Some(value);
        }

        self.metrics.record_miss();
        self.sync_metrics_lengths();
        None
    }

    /// Inserts a key-value pair.
    ///
    /// A ghost-list hit is resolved first, rebalancing `c1`/`c2`. The pair
    /// is then unconditionally written into T1 (evicting T1's LRU entry
    /// into B1 first if at capacity), and if the key already resides in
    /// T2, its value is updated there as well.
    pub fn put(&mut self, key: K, value: V) {
        self.rebalance_ghosts(&key);

        if self.t1.contains(&key) {
            self.t1.update_value_and_touch(&key, value.clone());
        } else {
            self.ensure_capacity_t1();
            self.t1.insert_front(key.clone(), value.clone());
        }

        if self.t2.contains(&key) {
            self.t2.update_value(&key, value);
        }

        self.sync_metrics_lengths();
    }

    /// Removes a key from both T1 and T2, returning the most authoritative
    /// value found (T2's, if present there, otherwise T1's).
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let from_t2 = self.t2.remove(key);
        let from_t1 = self.t1.remove(key);
        self.sync_metrics_lengths();
        from_t2.or(from_t1)
    }

    /// Removes every entry from T1, T2, and both ghost lists, resetting
    /// `c1`/`c2` to the configured capacity.
    pub fn clear(&mut self) {
        self.t1.clear();
        self.t2.clear();
        self.b1.clear();
        self.b2.clear();
        self.c1 = self.config.capacity().get();
        self.c2 = self.config.capacity().get();
        self.sync_metrics_lengths();
    }

    /// Returns the metrics collected for this cache.
    #[inline]
    pub fn metrics_snapshot(&self) -> &ArcCacheMetrics {
        &self.metrics
    }

    fn promote_to_t2(&mut self, key: &K, value: &V) {
        if self.t2.contains(key) {
            self.t2.update_value(key, value.clone());
        } else {
            self.ensure_capacity_t2();
            self.t2.insert_front(key.clone(), value.clone());
        }
        self.metrics.record_promotion();
    }

    fn ensure_capacity_t1(&mut self) {
        if self.t1.len() >= self.c1 {
            if let Some((evicted_key, _)) = self.t1.evict_last() {
                self.b1.insert(evicted_key);
                self.metrics.record_eviction();
            }
        }
    }

    fn ensure_capacity_t2(&mut self) {
        if self.t2.len() >= self.c2 {
            if let Some((evicted_key, _)) = self.t2.evict_last() {
                self.b2.insert(evicted_key);
                self.metrics.record_eviction();
            }
        }
    }

    /// Resolves a ghost-list hit, if any, shifting one unit of capacity
    /// from the sibling resident list and evicting from it first if the
    /// shift would otherwise leave it over its new, smaller capacity.
    fn rebalance_ghosts(&mut self, key: &K) {
        if self.b1.contains(key) {
            self.metrics.record_ghost_hit_b1();
            if self.c2 > 0 {
                self.c2 -= 1;
                self.c1 += 1;
                if self.t2.len() > self.c2 {
                    if let Some((evicted_key, _)) = self.t2.evict_last() {
                        self.b2.insert(evicted_key);
                        self.metrics.record_eviction();
                    }
                }
            }
            self.b1.remove(key);
        } else if self.b2.contains(key) {
            self.metrics.record_ghost_hit_b2();
            if self.c1 > 0 {
                self.c1 -= 1;
                self.c2 += 1;
                if self.t1.len() > self.c1 {
                    if let Some((evicted_key, _)) = self.t1.evict_last() {
                        self.b1.insert(evicted_key);
                        self.metrics.record_eviction();
                    }
                }
            }
            self.b2.remove(key);
        }
    }

    fn sync_metrics_lengths(&mut self) {
        self.metrics
            .set_list_lengths(self.t1.len(), self.t2.len(), self.b1.len(), self.b2.len());
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> Cache<K, V> for ArcCache<K, V, S> {
    #[inline]
    fn put(&mut self, key: K, value: V) {
        ArcCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<V> {
        ArcCache::get(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        ArcCache::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        ArcCache::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        ArcCache::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ArcCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for ArcCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArcCache")
            .field("capacity", &self.config.capacity())
            .field("c1", &self.c1)
            .field("c2", &self.c2)
            .field("t1_len", &self.t1.len())
            .field("t2_len", &self.t2.len())
            .field("b1_len", &self.b1.len())
            .field("b2_len", &self.b2.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cache<K: Hash + Eq + Clone, V: Clone>(cap: usize) -> ArcCache<K, V> {
        ArcCache::new(ArcCacheConfig::new(NonZeroUsize::new(cap).unwrap()))
    }

    #[test]
    fn get_put_round_trip() {
        let mut cache = make_cache(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"b"), Some(2));
        assert_eq!(cache.get(&"c"), None);
    }

    #[test]
    fn hot_entry_is_promoted_into_t2() {
        let mut cache = make_cache(2);
        cache.put("a", 1);
        assert_eq!(cache.get(&"a"), Some(1)); // 2nd access reaches default threshold of 2
        let metrics = cache.metrics();
        assert_eq!(metrics["promotions"], 1.0);
        assert_eq!(metrics["t2_len"], 1.0);
        assert_eq!(metrics["t1_len"], 1.0); // T1 retains its stale copy
    }

    #[test]
    fn ghost_hit_on_b1_grows_c1_at_c2_expense() {
        let mut cache = make_cache(1);
        cache.put("a", 1);
        cache.put("b", 2); // evicts "a" from T1 into B1 (capacity 1)
        assert_eq!(cache.c1(), 1);
        assert_eq!(cache.c2(), 1);

        assert_eq!(cache.get(&"a"), None); // ghost hit on B1
        assert_eq!(cache.c1(), 2);
        assert_eq!(cache.c2(), 0);
        assert_eq!(cache.c1() + cache.c2(), 2 * cache.cap().get());

        let metrics = cache.metrics();
        assert_eq!(metrics["ghost_hits_b1"], 1.0);
    }

    #[test]
    fn capacity_conservation_holds_across_operations() {
        let mut cache = make_cache(2);
        for i in 0..10 {
            cache.put(i, i * 10);
            cache.get(&i);
            cache.get(&(i / 2));
        }
        assert_eq!(cache.c1() + cache.c2(), 2 * cache.cap().get());
    }

    #[test]
    fn remove_deletes_from_both_segments() {
        let mut cache = make_cache(2);
        cache.put("a", 1);
        cache.get(&"a"); // promotes into T2
        assert_eq!(cache.remove(&"a"), Some(1));
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_resets_capacities() {
        let mut cache = make_cache(1);
        cache.put("a", 1);
        cache.put("b", 2); // forces a ghost eviction, skewing c1/c2
        cache.get(&"a");
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.c1(), 1);
        assert_eq!(cache.c2(), 1);
    }

    #[test]
    fn metrics_report_algorithm_name() {
        let cache: ArcCache<&str, i32> = make_cache(2);
        assert_eq!(cache.algorithm_name(), "ARC");
    }

    #[test]
    fn cache_trait_object_usage() {
        fn exercise<C: Cache<&'static str, i32>>(cache: &mut C) {
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.get(&"a"), Some(1));
            assert_eq!(cache.remove(&"b"), Some(2));
        }

        let mut cache: ArcCache<&'static str, i32> = make_cache(4);
        exercise(&mut cache);
    }
}
