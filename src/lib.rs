//! # adaptive-cache
//!
//! An adaptive cache engine: an LRU baseline, an ageing LFU, an LRU-K
//! admission filter, and ARC (Adaptive Replacement Cache) — plus a
//! sharded concurrency wrapper that can drop in front of any of them.
//!
//! ## Algorithm Selection Guide
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                    Which Cache Engine Should I Use?                          │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │                                                                              │
//! │  Is your workload primarily...                                               │
//! │                                                                              │
//! │  ┌─────────────────┐                                                         │
//! │  │ Recency-based?  │──Yes──▶        LRU                                     │
//! │  │ (recent = hot)  │                                                         │
//! │  └────────┬────────┘                                                         │
//! │           │                                                                  │
//! │          No                                                                  │
//! │           │                                                                  │
//! │           ▼                                                                  │
//! │  ┌─────────────────┐                                                         │
//! │  │ Frequency-based,│──Yes──▶        LFU                                     │
//! │  │ popularity ages?│                                                         │
//! │  └────────┬────────┘                                                         │
//! │           │                                                                  │
//! │          No                                                                  │
//! │           │                                                                  │
//! │           ▼                                                                  │
//! │  ┌─────────────────┐                                                         │
//! │  │ Want to filter  │──Yes──▶       LRU-K                                    │
//! │  │ out one-hit     │                                                         │
//! │  │ wonders?        │                                                         │
//! │  └────────┬────────┘                                                         │
//! │           │                                                                  │
//! │          No                                                                  │
//! │           │                                                                  │
//! │           ▼                                                                  │
//! │  ┌─────────────────┐                                                         │
//! │  │ Mixed/shifting  │──Yes──▶        ARC                                     │
//! │  │ recency vs.     │         (self-tunes the recency/frequency balance)      │
//! │  │ frequency?      │                                                         │
//! │  └─────────────────┘                                                         │
//! │                                                                              │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Engine | Description | Best Use Case |
//! |--------|-------------|---------------|
//! | [`LruCache`] | Least Recently Used | General purpose, recency-based access |
//! | [`LfuCache`] | Least Frequently Used, with ageing | Stable-to-slowly-shifting popularity |
//! | [`LruKCache`] | LRU-K admission filter | Scan resistance, filter one-hit wonders |
//! | [`ArcCache`] | Adaptive Replacement Cache | Mixed or unknown access patterns |
//! | [`Sharded`] | Concurrency wrapper | Any of the above, shared across threads |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! ```rust
//! use adaptive_cache::{Cache, LruCache};
//! use adaptive_cache::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig::new(NonZeroUsize::new(2).unwrap());
//! let mut cache = LruCache::new(config);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### LFU (Least Frequently Used, with ageing)
//!
//! Tracks per-frequency buckets so the least-frequently-used entry is found
//! in O(1); a global ageing counter keeps long-cold high-frequency entries
//! from permanently blocking newer items.
//!
//! ```rust
//! use adaptive_cache::{Cache, LfuCache};
//! use adaptive_cache::config::LfuCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LfuCacheConfig::new(NonZeroUsize::new(2).unwrap());
//! let mut cache = LfuCache::new(config);
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//! for _ in 0..10 {
//!     cache.get(&"popular");
//! }
//! cache.put("new", 3); // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! ```
//!
//! ### LRU-K (Admission Filter)
//!
//! A key is only admitted into the main cache once it has been observed `K`
//! times; until then it sits in a bounded history, so scans and one-hit
//! wonders never displace genuinely hot entries.
//!
//! ```rust
//! use adaptive_cache::{Cache, LruKCache};
//! use adaptive_cache::config::LruKCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruKCacheConfig::new(
//!     NonZeroUsize::new(100).unwrap(),
//!     NonZeroUsize::new(100).unwrap(),
//!     3,
//! );
//! let mut cache = LruKCache::new(config);
//! cache.put("scan-once", 1); // 1st sighting
//! assert!(cache.get(&"scan-once").is_none()); // 2nd sighting, still below k
//! assert!(cache.get(&"scan-once").is_some()); // 3rd sighting reaches k, admitted
//! ```
//!
//! ### ARC (Adaptive Replacement Cache)
//!
//! Splits its budget between a recency list and a frequency list, and uses
//! ghost lists of recently evicted keys to shift the balance toward
//! whichever list would have produced a hit.
//!
//! ```rust
//! use adaptive_cache::{Cache, ArcCache};
//! use adaptive_cache::config::ArcCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = ArcCacheConfig::new(NonZeroUsize::new(100).unwrap());
//! let mut cache = ArcCache::new(config);
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```
//!
//! ## Sharded Concurrency
//!
//! Enable the `concurrent` feature for a thread-safe wrapper around any
//! engine:
//!
//! ```toml
//! [dependencies]
//! adaptive-cache = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust
//! # #[cfg(feature = "concurrent")] {
//! use adaptive_cache::{Cache, LruCache, Sharded};
//! use adaptive_cache::config::{LruCacheConfig, ShardedCacheConfig};
//! use core::num::NonZeroUsize;
//!
//! let config = ShardedCacheConfig::new(NonZeroUsize::new(10_000).unwrap());
//! let cache: Sharded<String, i32, LruCache<String, i32>> =
//!     Sharded::new(config, |cap| LruCache::new(LruCacheConfig::new(cap)));
//! cache.put("key".into(), 42);
//! # }
//! ```
//!
//! Shards use **lock striping** for high throughput: each key routes to
//! exactly one shard by hash, so unrelated keys never contend.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                    Sharded<E> (16 shards)                          │
//! │                                                                    │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐     ┌─────────┐              │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ ... │ Shard 15│              │
//! │  │ [Mutex] │ │ [Mutex] │ │ [Mutex] │     │ [Mutex] │              │
//! │  └─────────┘ └─────────┘ └─────────┘     └─────────┘              │
//! │       ▲           ▲           ▲               ▲                   │
//! │       │           │           │               │                   │
//! │  hash(k1)%16  hash(k2)%16  hash(k3)%16   hash(kN)%16              │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cache`]: The `Cache<K, V>` trait every engine implements
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation, with ageing
//! - [`lru_k`]: LRU-K admission filter implementation
//! - [`arc`]: Adaptive Replacement Cache implementation
//! - [`config`]: Configuration structures for all cache engines
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`sharded`]: Sharded concurrency wrapper (requires `concurrent` feature)

#![no_std]

#[cfg(test)]
extern crate scoped_threadpool;

/// Uniform `put`/`get` contract implemented by every cache engine.
pub mod cache;

/// Unified cache entry type.
///
/// Holds a key, a value, and the access count every engine uses to decide
/// promotion and ageing.
pub mod entry;

/// Doubly linked list implementation with in-place editing capabilities.
///
/// This module provides a memory-efficient doubly linked list that allows for
/// efficient insertion, removal, and reordering operations.
///
/// **Note**: This module is internal infrastructure and should not be used
/// directly by library consumers. It exposes unsafe raw pointer operations
/// that require careful invariant maintenance. Use the high-level cache
/// implementations instead.
pub(crate) mod list;

/// Cache configuration structures.
///
/// Provides configuration structures for all cache engine implementations.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation, with ageing.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached, tracked in O(1) per-frequency buckets. A global
/// age counter keeps long-resident high-frequency entries from permanently
/// starving newer ones.
pub mod lfu;

/// LRU-K admission filter implementation.
///
/// Wraps an [`LruCache`] behind a bounded history of access counts: a key is
/// only admitted into the main cache once it has been observed `K` times.
pub mod lru_k;

/// Adaptive Replacement Cache (ARC) implementation.
///
/// Splits its capacity between a recency list and a frequency list, using
/// ghost lists of recently evicted keys to adapt the split toward whichever
/// policy would have produced more hits.
pub mod arc;

/// Cache metrics system.
///
/// Provides a flexible metrics collection and reporting system for all cache
/// engines. Each engine tracks engine-specific metrics while implementing a
/// common interface.
pub mod metrics;

/// Sharded concurrency wrapper.
///
/// Wraps any [`Cache`](cache::Cache) implementation in lock-striped shards
/// for high-throughput multi-threaded access. Available when the
/// `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod sharded;

// Re-export the shared contract.
pub use cache::Cache;

// Re-export cache engines.
pub use arc::ArcCache;
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use lru_k::LruKCache;

// Re-export entry type.
pub use entry::CacheEntry;

#[cfg(feature = "concurrent")]
pub use sharded::Sharded;
