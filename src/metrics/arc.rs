//! ARC Cache Metrics
//!
//! Metrics specific to the Adaptive Replacement Cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Metrics tracked by [`ArcCache`](crate::ArcCache).
#[derive(Debug, Default, Clone)]
pub struct ArcCacheMetrics {
    core: CoreCacheMetrics,
    /// Current length of T1 (recency list).
    pub t1_len: usize,
    /// Current length of T2 (frequency list).
    pub t2_len: usize,
    /// Current length of B1 (recency ghost list).
    pub b1_len: usize,
    /// Current length of B2 (frequency ghost list).
    pub b2_len: usize,
    /// Number of hits against the B1 ghost list.
    pub ghost_hits_b1: u64,
    /// Number of hits against the B2 ghost list.
    pub ghost_hits_b2: u64,
    /// Number of T1-to-T2 promotions.
    pub promotions: u64,
}

impl ArcCacheMetrics {
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

    /// Records a hit against the B1 ghost list.
    pub fn record_ghost_hit_b1(&mut self) {
        self.ghost_hits_b1 += 1;
    }

    /// Records a hit against the B2 ghost list.
    pub fn record_ghost_hit_b2(&mut self) {
        self.ghost_hits_b2 += 1;
    }

    /// Records a T1-to-T2 promotion.
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    /// Updates the tracked list lengths.
    pub fn set_list_lengths(&mut self, t1_len: usize, t2_len: usize, b1_len: usize, b2_len: usize) {
        self.t1_len = t1_len;
        self.t2_len = t2_len;
        self.b1_len = b1_len;
        self.b2_len = b2_len;
    }
}

impl CacheMetrics for ArcCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        self.core.insert_into(&mut metrics);
        metrics.insert("t1_len".to_string(), self.t1_len as f64);
        metrics.insert("t2_len".to_string(), self.t2_len as f64);
        metrics.insert("b1_len".to_string(), self.b1_len as f64);
        metrics.insert("b2_len".to_string(), self.b2_len as f64);
        metrics.insert("ghost_hits_b1".to_string(), self.ghost_hits_b1 as f64);
        metrics.insert("ghost_hits_b2".to_string(), self.ghost_hits_b2 as f64);
        metrics.insert("promotions".to_string(), self.promotions as f64);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_ghost_hits_and_promotions() {
        let mut metrics = ArcCacheMetrics::new();
        metrics.record_ghost_hit_b1();
        metrics.record_ghost_hit_b2();
        metrics.record_promotion();
        metrics.set_list_lengths(3, 4, 1, 2);

        let snapshot = metrics.metrics();
        assert_eq!(snapshot["ghost_hits_b1"], 1.0);
        assert_eq!(snapshot["ghost_hits_b2"], 1.0);
        assert_eq!(snapshot["promotions"], 1.0);
        assert_eq!(snapshot["t1_len"], 3.0);
        assert_eq!(snapshot["b2_len"], 2.0);
        assert_eq!(metrics.algorithm_name(), "ARC");
    }
}
