//! Least Frequently Used (LFU) Cache Implementation, with Ageing
//!
//! An LFU cache evicts the item with the lowest access frequency when
//! capacity is reached. Frequencies are tracked in `O(1)` per operation using
//! a map of frequency buckets, each an ordinary recency list: within a
//! frequency bucket, ties are broken least-recently-used first.
//!
//! # Data Structure
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        LFU Cache                                   │
//! │                                                                     │
//! │  HashMap<K, *Node>      BTreeMap<usize, List<CacheEntry<K,V>>>     │
//! │  ┌──────────────┐       ┌───────────────────────────────────┐     │
//! │  │ "apple"  ────────────▶ freq 1: [ ]                        │     │
//! │  │ "banana" ────────────▶ freq 3: [banana, cherry]           │     │
//! │  │ "cherry" ────────────▶ freq 5: [durian]                   │     │
//! │  └──────────────┘       └───────────────────────────────────┘     │
//! │                          min_frequency tracks the lowest key       │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A hit removes the entry from its current bucket, increments its
//! frequency, and re-inserts it at the front of the (possibly new) bucket.
//! If the vacated bucket was the minimum and is now empty, `min_frequency`
//! advances to the entry's new frequency — the next-lowest bucket, since
//! nothing populated the old one in between.
//!
//! # Ageing
//!
//! Left alone, LFU lets long-dead keys that were once popular sit at the top
//! of the frequency order forever ("cache pollution"). This implementation
//! tracks the mean frequency across all resident entries; whenever a hit
//! pushes that mean above `max_average` (see [`LfuCacheConfig`]), every
//! entry's frequency is reduced by `max_average / 2` (minimum 1) and the
//! buckets are rebuilt from scratch. This periodically gives cold-but-new
//! entries a chance to compete with old, merely-popular ones.
//!
//! # Thread Safety
//!
//! `LfuCache` is **not thread-safe**. For concurrent access, wrap it with
//! [`Sharded`](crate::Sharded) (requires the `concurrent` feature).
//!
//! # Example
//!
//! ```
//! use adaptive_cache::LfuCache;
//! use adaptive_cache::config::LfuCacheConfig;
//! use adaptive_cache::Cache;
//! use core::num::NonZeroUsize;
//!
//! let config = LfuCacheConfig::new(NonZeroUsize::new(3).unwrap());
//! let mut cache = LfuCache::new(config);
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//! cache.get(&"a");
//! cache.get(&"a");
//!
//! cache.put("d", 4); // "b" or "c" evicted; both are at frequency 1
//! assert_eq!(cache.get(&"a"), Some(&1)); // survives due to higher frequency
//! ```

extern crate alloc;

use crate::cache::Cache;
use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{Entry, List};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
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

/// A Least Frequently Used (LFU) cache with ageing, `O(1)` operations.
///
/// # Safety
///
/// `map` stores raw pointers into nodes owned by one of `frequency_lists`'
/// lists. A pointer is valid exactly as long as its node has not been moved
/// to a different bucket or removed — every path that does either
/// (`get`, `put`, `remove`, `clear`, the ageing pass) updates `map` in
/// lockstep.
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,
    min_frequency: usize,
    total_frequency: u64,
    map: HashMap<K, *mut Entry<CacheEntry<K, V>>, S>,
    frequency_lists: BTreeMap<usize, List<CacheEntry<K, V>>>,
    metrics: LfuCacheMetrics,
}

// SAFETY: LfuCache owns all data; raw pointers only ever point at nodes
// owned by one of `frequency_lists`. Concurrent access still requires
// external synchronization.
unsafe impl<K: Send, V: Send, S: Send> Send for LfuCache<K, V, S> {}
unsafe impl<K: Send, V: Send, S: Sync> Sync for LfuCache<K, V, S> {}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache from a configuration using the default hasher.
    #[must_use]
    pub fn new(config: LfuCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache from a configuration with a custom hasher.
    #[must_use]
    pub fn with_hasher(config: LfuCacheConfig, hasher: S) -> Self {
        let map_capacity = config.capacity().get().next_power_of_two();
        Self {
            config,
            min_frequency: 1,
            total_frequency: 0,
            map: HashMap::with_capacity_and_hasher(map_capacity, hasher),
            frequency_lists: BTreeMap::new(),
            metrics: LfuCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity()
    }

    /// Returns the current number of entries in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the lowest frequency bucket currently populated.
    #[inline]
    pub fn min_frequency(&self) -> usize {
        self.min_frequency
    }

    fn mean_frequency(&self) -> u64 {
        let len = self.map.len() as u64;
        if len == 0 {
            0
        } else {
            self.total_frequency / len
        }
    }

    /// Moves `node`, currently in the `old_frequency` bucket, into the next
    /// bucket up and returns its (possibly new) node pointer.
    ///
    /// # Safety
    ///
    /// `node` must be a valid, currently-resident pointer obtained from `map`.
    unsafe fn promote(
        &mut self,
        key: &K,
        node: *mut Entry<CacheEntry<K, V>>,
        old_frequency: usize,
    ) -> *mut Entry<CacheEntry<K, V>>
    where
        K: Clone,
    {
        let new_frequency = old_frequency + 1;
        self.total_frequency += 1;

        let boxed_entry = self
            .frequency_lists
            .get_mut(&old_frequency)
            .and_then(|list| list.remove(node))
            .expect("node must belong to its recorded frequency bucket");

        if self
            .frequency_lists
            .get(&old_frequency)
            .is_some_and(List::is_empty)
            && old_frequency == self.min_frequency
        {
            self.min_frequency = new_frequency;
        }

        let entry_ptr = alloc::boxed::Box::into_raw(boxed_entry);
        (*entry_ptr).get_value_mut().access_count = new_frequency as u64;

        let capacity = self.config.capacity();
        self.frequency_lists
            .entry(new_frequency)
            .or_insert_with(|| List::new(capacity))
            .attach_from_other_list(entry_ptr);

        if let Some(slot) = self.map.get_mut(key) {
            *slot = entry_ptr;
        }

        self.metrics.set_min_frequency(self.min_frequency);
        entry_ptr
    }

    /// Subtracts `max_average / 2` from every resident entry's frequency
    /// (clamped to a minimum of 1) and rebuilds the frequency buckets from
    /// scratch. Triggered when the mean frequency exceeds `max_average`.
    fn age(&mut self)
    where
        K: Clone,
    {
        let capacity = self.config.capacity();
        let reduction = (self.config.max_average() / 2).max(1);
        let mut rebuilt: BTreeMap<usize, List<CacheEntry<K, V>>> = BTreeMap::new();
        let mut new_total = 0u64;
        let mut new_min = usize::MAX;

        for (_, mut list) in core::mem::take(&mut self.frequency_lists) {
            while let Some(boxed_entry) = list.remove_last() {
                let entry_ptr = alloc::boxed::Box::into_raw(boxed_entry);
                unsafe {
                    let aged = (*entry_ptr)
                        .get_value()
                        .access_count
                        .saturating_sub(reduction)
                        .max(1);
                    (*entry_ptr).get_value_mut().access_count = aged;
                    let freq = aged as usize;
                    new_total += aged;
                    new_min = new_min.min(freq);

                    let bucket = rebuilt.entry(freq).or_insert_with(|| List::new(capacity));
                    bucket.attach_last_from_other_list(entry_ptr);

                    let key = (*entry_ptr).get_value().key.clone();
                    if let Some(slot) = self.map.get_mut(&key) {
                        *slot = entry_ptr;
                    }
                }
            }
        }

        self.frequency_lists = rebuilt;
        self.total_frequency = new_total;
        self.min_frequency = if new_min == usize::MAX { 1 } else { new_min };
        self.metrics.record_age_reduction();
        self.metrics.set_min_frequency(self.min_frequency);
    }

    /// Retrieves a reference to the value for the given key, incrementing its
    /// frequency on a hit and triggering an ageing pass if the mean frequency
    /// has climbed past `max_average`.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        unsafe {
            let frequency = (*node).get_value().access_count as usize;
            let owned_key = (*node).get_value().key.clone();
            let new_node = self.promote(&owned_key, node, frequency);
            self.metrics.record_hit();

            if self.mean_frequency() > self.config.max_average() {
                self.age();
                let node = *self.map.get(key)?;
                return Some(&(*node).get_value().value);
            }

            Some(&(*new_node).get_value().value)
        }
    }

    /// Removes a key from the cache, returning its value if present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let node = self.map.remove(key)?;
        let value = unsafe {
            let frequency = (*node).get_value().access_count as usize;
            self.total_frequency = self.total_frequency.saturating_sub(frequency as u64);
            let bucket = self.frequency_lists.get_mut(&frequency)?;
            let boxed = bucket.remove(node)?;
            let drained = bucket.is_empty();
            if drained && frequency == self.min_frequency {
                self.min_frequency = self
                    .frequency_lists
                    .iter()
                    .find(|(_, list)| !list.is_empty())
                    .map(|(&freq, _)| freq)
                    .unwrap_or(1);
            }
            boxed.get_value().value.clone()
        };
        Some(value)
    }

    /// Removes every entry from the cache.
    pub fn clear(&mut self) {
        self.map.clear();
        self.frequency_lists.clear();
        self.total_frequency = 0;
        self.min_frequency = 1;
    }

    /// Returns the metrics collected for this cache.
    #[inline]
    pub fn metrics_snapshot(&self) -> &LfuCacheMetrics {
        &self.metrics
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// A new key starts at frequency 1. An existing key's value is replaced
    /// without affecting its frequency. If the cache is at capacity, the
    /// entry with the lowest frequency (oldest among ties) is evicted first.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&node) = self.map.get(&key) {
            unsafe {
                (*node).get_value_mut().value = value;
            }
            return;
        }

        if self.map.len() >= self.config.capacity().get() {
            let evict_freq = self.min_frequency;

            if let Some(list) = self.frequency_lists.get_mut(&evict_freq) {
                if let Some(old_entry) = list.remove_last() {
                    unsafe {
                        let evicted = old_entry.get_value();
                        self.map.remove(&evicted.key);
                        self.total_frequency =
                            self.total_frequency.saturating_sub(evicted.access_count);
                    }
                    self.metrics.record_eviction();
                }
                // If this drains the bucket, `min_frequency` goes stale here.
                // We don't rescan for the next-lowest nonempty bucket: the
                // insertion below always resets it to 1 for the new entry.
            }
        }

        let capacity = self.config.capacity();
        let cache_entry = CacheEntry::new(key.clone(), value);
        let bucket = self
            .frequency_lists
            .entry(1)
            .or_insert_with(|| List::new(capacity));
        if let Some(node) = bucket.add(cache_entry) {
            self.map.insert(key, node);
            self.total_frequency += 1;
            self.min_frequency = 1;
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> Cache<K, V> for LfuCache<K, V, S> {
    #[inline]
    fn put(&mut self, key: K, value: V) {
        LfuCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<V> {
        LfuCache::get(self, key).cloned()
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LfuCache::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        LfuCache::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.config.capacity())
            .field("len", &self.map.len())
            .field("min_frequency", &self.min_frequency)
            .finish()
    }
}
