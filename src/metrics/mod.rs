//! Cache Metrics System
//!
//! Provides a flexible metrics system for cache algorithms using
//! `BTreeMap`-based metrics reporting. Each cache algorithm tracks its own
//! specific metrics while implementing a common `CacheMetrics` trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! - **Deterministic ordering**: metrics always appear in consistent order.
//! - **Reproducible output**: essential for testing and benchmark comparisons.
//! - **Stable serialization**: exports have predictable key ordering.
//!
//! The performance difference (O(log n) vs O(1)) is negligible with a
//! handful of metric keys, but the deterministic behavior is invaluable for
//! reproducible tests.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod arc;
pub mod lfu;
pub mod lru;
pub mod lru_k;

#[cfg(feature = "concurrent")]
pub mod sharded;

pub use arc::ArcCacheMetrics;
pub use lfu::LfuCacheMetrics;
pub use lru::LruCacheMetrics;
pub use lru_k::LruKCacheMetrics;

#[cfg(feature = "concurrent")]
pub use sharded::ShardedCacheMetrics;

/// Common metrics tracked by every cache algorithm.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of `get` calls made against the cache.
    pub requests: u64,
    /// Number of `get` calls that found a resident entry.
    pub hits: u64,
    /// Number of entries evicted due to capacity constraints.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a fresh, zeroed set of metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    /// Records a cache miss.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Returns the fraction of requests that were hits, or 0.0 with no requests.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Returns the fraction of requests that were misses, or 0.0 with no requests.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Inserts the common metrics into a `BTreeMap`, alphabetically by key.
    pub fn insert_into(&self, metrics: &mut BTreeMap<String, f64>) {
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("misses".to_string(), (self.requests - self.hits) as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("requests".to_string(), self.requests as f64);
    }
}

/// Trait all cache algorithms implement for metrics reporting.
///
/// The returned `BTreeMap` contains both core metrics and any
/// algorithm-specific metrics, sorted alphabetically for reproducible output.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Name identifying the cache algorithm (e.g. `"LRU"`, `"ARC"`).
    fn algorithm_name(&self) -> &'static str;
}
