//! LRU-K Cache Metrics
//!
//! Metrics specific to the LRU-K admission filter.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Metrics tracked by [`LruKCache`](crate::LruKCache).
#[derive(Debug, Default, Clone)]
pub struct LruKCacheMetrics {
    core: CoreCacheMetrics,
    /// Number of keys promoted from history into the main cache.
    pub admissions: u64,
    /// Current number of keys tracked in the history structure.
    pub history_size: usize,
}

impl LruKCacheMetrics {
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

    /// Records a promotion from history to main.
    pub fn record_admission(&mut self) {
        self.admissions += 1;
    }

    /// Updates the tracked history size.
    pub fn set_history_size(&mut self, history_size: usize) {
        self.history_size = history_size;
    }
}

impl CacheMetrics for LruKCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        self.core.insert_into(&mut metrics);
        metrics.insert("admissions".to_string(), self.admissions as f64);
        metrics.insert("history_size".to_string(), self.history_size as f64);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU-K"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_admissions_and_history_size() {
        let mut metrics = LruKCacheMetrics::new();
        metrics.record_admission();
        metrics.set_history_size(5);

        let snapshot = metrics.metrics();
        assert_eq!(snapshot["admissions"], 1.0);
        assert_eq!(snapshot["history_size"], 5.0);
        assert_eq!(metrics.algorithm_name(), "LRU-K");
    }
}
