//! Sharded Concurrency Wrapper
//!
//! A thread-safe wrapper around any [`Cache`] implementation using lock
//! striping (segmented storage) for high-performance concurrent access.
//!
//! # How It Works
//!
//! The key space is partitioned across `N` independent shards, each holding
//! its own engine instance behind its own [`parking_lot::Mutex`]. An
//! operation only ever locks the one shard its key hashes into, so unrelated
//! keys never contend.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                             Sharded<E>                               │
//! │                                                                      │
//! │  hash(key) % N  ──▶  Shard Selection                                 │
//! │                                                                      │
//! │  ┌──────────────┐ ┌──────────────┐     ┌──────────────┐              │
//! │  │   Shard 0    │ │   Shard 1    │ ... │   Shard N-1  │              │
//! │  │  ┌────────┐  │ │  ┌────────┐  │     │  ┌────────┐  │              │
//! │  │  │ Mutex  │  │ │  │ Mutex  │  │     │  │ Mutex  │  │              │
//! │  │  └───┬────┘  │ │  └───┬────┘  │     │  └───┬────┘  │              │
//! │  │      ▼       │ │      ▼       │     │      ▼       │              │
//! │  │  engine: E   │ │  engine: E   │     │  engine: E   │              │
//! │  └──────────────┘ └──────────────┘     └──────────────┘              │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Engine-Agnostic
//!
//! `Sharded<K, V, E, S>` is generic over any `E: Cache<K, V>` — [`LruCache`](crate::LruCache),
//! [`LfuCache`](crate::LfuCache), [`LruKCache`](crate::LruKCache), or
//! [`ArcCache`](crate::ArcCache) — built per shard from a factory closure you
//! supply. Each shard runs its own independent instance of the engine; there
//! is no cross-shard coordination of recency, frequency, or admission state.
//!
//! # Trade-offs
//!
//! - **Pros**: near-linear scaling with thread count, no global lock.
//! - **Cons**: eviction and admission decisions are per-shard, not global. An
//!   item may be evicted from one shard while another shard holds items that
//!   were accessed less recently in wall-clock time.
//!
//! # Example
//!
//! ```
//! use adaptive_cache::{Cache, LruCache, Sharded};
//! use adaptive_cache::config::{LruCacheConfig, ShardedCacheConfig};
//! use core::num::NonZeroUsize;
//!
//! let config = ShardedCacheConfig::new(NonZeroUsize::new(1000).unwrap())
//!     .with_shard_count(4);
//! let mut cache: Sharded<String, i32, LruCache<String, i32>> =
//!     Sharded::new(config, |cap| LruCache::new(LruCacheConfig::new(cap)));
//!
//! cache.put("a".to_string(), 1);
//! assert_eq!(cache.get(&"a".to_string()), Some(1));
//! ```

extern crate alloc;
extern crate std;

use crate::cache::Cache;
use crate::config::sharded::ShardedCacheConfig;
use crate::metrics::{CoreCacheMetrics, ShardedCacheMetrics};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

struct Shard<E> {
    engine: E,
    metrics: CoreCacheMetrics,
}

/// A thread-safe, sharded wrapper around any [`Cache`] engine.
///
/// Keys are routed to one of `N` independent shards by hash, each guarded by
/// its own [`parking_lot::Mutex`]. See the [module docs](self) for the
/// trade-offs this implies.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone + Send`.
/// - `V`: Value type. Must implement `Clone + Send`.
/// - `E`: The underlying engine, any `Cache<K, V> + Send`.
/// - `S`: Hash builder used to route keys to shards. Defaults to `DefaultHashBuilder`.
pub struct Sharded<K, V, E, S = DefaultHashBuilder> {
    shards: Box<[Mutex<Shard<E>>]>,
    hash_builder: S,
    config: ShardedCacheConfig,
    _marker: PhantomData<(K, V)>,
}

// SAFETY: Sharded owns all shard state behind per-shard Mutexes; the engine
// and hasher themselves must be Send for the whole to be shared across
// threads, and Sync follows from every access path acquiring a shard lock
// first.
unsafe impl<K: Send, V: Send, E: Send, S: Send> Send for Sharded<K, V, E, S> {}
unsafe impl<K: Send, V: Send, E: Send, S: Sync> Sync for Sharded<K, V, E, S> {}

impl<K, V, E> Sharded<K, V, E, DefaultHashBuilder>
where
    K: Hash + Eq + Clone + Send,
    V: Clone + Send,
    E: Cache<K, V> + Send,
{
    /// Builds a sharded cache from a configuration and a per-shard factory.
    ///
    /// `factory` is invoked once per shard with that shard's capacity
    /// (`ceil(total_capacity / shard_count)`), and must return a freshly
    /// constructed engine instance — each shard owns an entirely independent
    /// engine, with no shared state.
    pub fn new(
        config: ShardedCacheConfig,
        factory: impl Fn(core::num::NonZeroUsize) -> E,
    ) -> Self {
        Self::with_hasher(config, factory, DefaultHashBuilder::default())
    }
}

impl<K, V, E, S> Sharded<K, V, E, S>
where
    K: Hash + Eq + Clone + Send,
    V: Clone + Send,
    E: Cache<K, V> + Send,
    S: BuildHasher + Clone + Send,
{
    /// Builds a sharded cache from a configuration, a per-shard factory, and
    /// a custom hash builder used to route keys to shards.
    pub fn with_hasher(
        config: ShardedCacheConfig,
        factory: impl Fn(core::num::NonZeroUsize) -> E,
        hash_builder: S,
    ) -> Self {
        let per_shard = config.per_shard_capacity();
        let shards: Vec<_> = (0..config.shard_count())
            .map(|_| {
                Mutex::new(Shard {
                    engine: factory(per_shard),
                    metrics: CoreCacheMetrics::new(),
                })
            })
            .collect();

        Self {
            shards: shards.into_boxed_slice(),
            hash_builder,
            config,
            _marker: PhantomData,
        }
    }

    /// Returns the number of shards backing this cache.
    #[inline]
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Returns the configuration this cache was built from.
    #[inline]
    pub fn config(&self) -> ShardedCacheConfig {
        self.config
    }

    #[inline]
    fn shard_index(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) as usize) % self.shards.len()
    }

    /// Stores `value` under `key` in whichever shard it hashes into.
    ///
    /// `Cache::put` does not report which key it evicted, so eviction counts
    /// are not tracked here; [`metrics_snapshot`](Self::metrics_snapshot)
    /// reports zero evictions regardless of the wrapped engine's behavior.
    pub fn put(&self, key: K, value: V) {
        let index = self.shard_index(&key);
        let mut shard = self.shards[index].lock();
        shard.engine.put(key, value);
    }

    /// Returns a clone of the value stored under `key`, or `None` on a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let index = self.shard_index(key);
        let mut shard = self.shards[index].lock();
        let value = shard.engine.get(key);
        if value.is_some() {
            shard.metrics.record_hit();
        } else {
            shard.metrics.record_miss();
        }
        value
    }

    /// Removes `key` from the cache, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        let index = self.shard_index(key);
        self.shards[index].lock().engine.remove(key)
    }

    /// Returns the total number of resident entries across all shards.
    ///
    /// Acquires each shard's lock sequentially, so the result may be
    /// slightly stale under concurrent mutation.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().engine.len()).sum()
    }

    /// Returns `true` if every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.lock().engine.is_empty())
    }

    /// Removes every resident entry from every shard.
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().engine.clear();
        }
    }

    /// Returns an aggregate metrics snapshot summed across every shard.
    pub fn metrics_snapshot(&self) -> ShardedCacheMetrics {
        let per_shard: Vec<CoreCacheMetrics> =
            self.shards.iter().map(|s| s.lock().metrics.clone()).collect();
        ShardedCacheMetrics::aggregate(self.shards.len(), &per_shard)
    }
}

impl<K, V, E, S> core::fmt::Debug for Sharded<K, V, E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sharded")
            .field("shard_count", &self.shards.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
