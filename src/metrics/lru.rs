//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;

/// Metrics tracked by [`LruCache`](crate::LruCache).
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates a fresh, zeroed set of metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit.
    pub fn record_hit(&mut self) {
        self.core.record_hit();
    }

    /// Records a miss.
    pub fn record_miss(&mut self) {
        self.core.record_miss();
    }

    /// Records an eviction.
    pub fn record_eviction(&mut self) {
        self.core.record_eviction();
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<alloc::string::String, f64> {
        let mut metrics = BTreeMap::new();
        self.core.insert_into(&mut metrics);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_hits_and_misses() {
        let mut metrics = LruCacheMetrics::new();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_eviction();

        let snapshot = metrics.metrics();
        assert_eq!(snapshot["hits"], 1.0);
        assert_eq!(snapshot["misses"], 1.0);
        assert_eq!(snapshot["evictions"], 1.0);
        assert_eq!(snapshot["requests"], 2.0);
        assert_eq!(metrics.algorithm_name(), "LRU");
    }
}
