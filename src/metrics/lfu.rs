//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Metrics tracked by [`LfuCache`](crate::LfuCache).
#[derive(Debug, Default, Clone)]
pub struct LfuCacheMetrics {
    core: CoreCacheMetrics,
    /// Current minimum non-empty frequency bucket.
    pub min_frequency: usize,
    /// Number of times the ageing (frequency-halving) pass has fired.
    pub age_reductions: u64,
}

impl LfuCacheMetrics {
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

    /// Records that the ageing pass fired.
    pub fn record_age_reduction(&mut self) {
        self.age_reductions += 1;
    }

    /// Updates the tracked minimum frequency.
    pub fn set_min_frequency(&mut self, min_frequency: usize) {
        self.min_frequency = min_frequency;
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        self.core.insert_into(&mut metrics);
        metrics.insert("age_reductions".to_string(), self.age_reductions as f64);
        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
