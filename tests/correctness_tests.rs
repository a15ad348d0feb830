//! Correctness Tests for Cache Engines
//!
//! This module validates the fundamental correctness of each cache engine
//! using simple, predictable access patterns. Each test explicitly validates
//! which specific key gets evicted when a put causes an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (1-4 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Universal invariants and laws that hold across every engine
//! - Concrete numbered scenarios tracing a fixed access sequence by hand

use adaptive_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use adaptive_cache::metrics::CacheMetrics;
use adaptive_cache::{ArcCache, LfuCache, LruCache, LruKCache};
use std::num::NonZeroUsize;

fn cap(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn make_lru<K: std::hash::Hash + Eq + Clone, V: Clone>(capacity: usize) -> LruCache<K, V> {
    LruCache::new(LruCacheConfig::new(cap(capacity)))
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V: Clone>(capacity: usize) -> LfuCache<K, V> {
    LfuCache::new(LfuCacheConfig::new(cap(capacity)))
}

fn make_lfu_with_max_average<K: std::hash::Hash + Eq + Clone, V: Clone>(
    capacity: usize,
    max_average: u64,
) -> LfuCache<K, V> {
    LfuCache::new(LfuCacheConfig::new(cap(capacity)).with_max_average(max_average))
}

fn make_lru_k<K: std::hash::Hash + Eq + Clone, V: Clone>(
    main_capacity: usize,
    history_capacity: usize,
    k: u32,
) -> LruKCache<K, V> {
    LruKCache::new(LruKCacheConfig::new(cap(main_capacity), cap(history_capacity), k))
}

fn make_arc<K: std::hash::Hash + Eq + Clone, V: Clone>(capacity: usize) -> ArcCache<K, V> {
    ArcCache::new(ArcCacheConfig::new(cap(capacity)))
}

// ============================================================================
// UNIVERSAL INVARIANTS
// ============================================================================

#[test]
fn lru_bounded_size_never_exceeds_capacity() {
    let mut cache = make_lru::<i32, i32>(3);
    for i in 0..20 {
        cache.put(i, i);
        assert!(cache.len() <= 3, "len {} exceeds capacity 3", cache.len());
    }
}

#[test]
fn lfu_bounded_size_never_exceeds_capacity() {
    let mut cache = make_lfu::<i32, i32>(3);
    for i in 0..20 {
        cache.put(i, i);
        assert!(cache.len() <= 3, "len {} exceeds capacity 3", cache.len());
    }
}

#[test]
fn lru_k_bounded_size_never_exceeds_main_capacity() {
    let mut cache = make_lru_k::<i32, i32>(3, 10, 2);
    for i in 0..20 {
        cache.put(i, i);
        cache.put(i, i);
        assert!(cache.len() <= 3, "main cache exceeded capacity 3");
    }
}

#[test]
fn arc_bounded_size_never_exceeds_2c() {
    let mut cache = make_arc::<i32, i32>(3);
    for i in 0..20 {
        cache.put(i, i);
        cache.get(&i);
        assert!(cache.len() <= 2 * 3, "resident entries exceeded 2C");
    }
}

#[test]
fn arc_capacity_conservation_c1_plus_c2_is_constant() {
    let mut cache = make_arc::<i32, i32>(4);
    assert_eq!(cache.c1() + cache.c2(), 8);
    for i in 0..30 {
        cache.put(i, i * 10);
        cache.get(&i);
        cache.get(&(i / 2));
        assert_eq!(
            cache.c1() + cache.c2(),
            8,
            "c1+c2 drifted away from the conserved 2C total"
        );
    }
}

#[test]
fn lfu_min_frequency_is_the_smallest_nonempty_bucket_before_eviction() {
    let mut cache = make_lfu::<i32, &str>(2);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.get(&1);
    cache.get(&1);
    // key 1 is now at frequency 3, key 2 is still at frequency 1.
    assert_eq!(cache.min_frequency(), 1);
    cache.put(3, "c"); // evicts key 2, the only occupant of the min bucket
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(&"a"));
}

#[test]
fn lru_k_admits_nothing_before_k_sightings() {
    let mut cache = make_lru_k::<i32, &str>(2, 10, 3);
    cache.put(1, "a");
    assert_eq!(cache.get(&1), None, "1st sighting, below k");
    assert_eq!(cache.get(&1), None, "2nd sighting, below k");
    assert_eq!(cache.get(&1), Some("a"), "3rd sighting reaches k");
}

// ============================================================================
// LAWS
// ============================================================================

#[test]
fn put_then_get_roundtrips_absent_eviction() {
    let mut lru = make_lru::<&str, i32>(4);
    lru.put("a", 1);
    assert_eq!(lru.get(&"a"), Some(&1));

    let mut lfu = make_lfu::<&str, i32>(4);
    lfu.put("a", 1);
    assert_eq!(lfu.get(&"a"), Some(&1));

    let mut arc = make_arc::<&str, i32>(4);
    arc.put("a", 1);
    assert_eq!(arc.get(&"a"), Some(1));
}

#[test]
fn repeated_hit_is_idempotent_on_membership_and_monotonic_on_access_count() {
    let mut cache = make_lfu::<&str, i32>(4);
    cache.put("a", 1);
    let mut last = 0;
    for _ in 0..5 {
        assert_eq!(cache.get(&"a"), Some(&1), "hit must not evict the key");
        let frequency = cache.min_frequency();
        assert!(frequency >= last, "access count must not decrease on a hit");
        last = frequency;
    }
}

// ============================================================================
// BOUNDARY BEHAVIORS
// ============================================================================
//
// Capacity 0 is not a reachable state: every config constructor takes a
// `NonZeroUsize`, so the type system rules it out rather than the runtime.

#[test]
fn capacity_one_keeps_only_the_most_recent_key_lru() {
    let mut cache = make_lru::<&str, i32>(1);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(&2));
}

#[test]
fn capacity_one_keeps_only_the_most_recent_key_lfu() {
    let mut cache = make_lfu::<&str, i32>(1);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(&2));
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

/// Scenario 1: LRU eviction.
#[test]
fn scenario_lru_eviction() {
    let mut cache = make_lru::<i32, &str>(2);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.get(&1); // "a" becomes most recently used
    cache.put(3, "c"); // evicts "b", the least recently used

    assert_eq!(cache.get(&1), Some(&"a"));
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&3), Some(&"c"));
}

/// Scenario 2: LFU eviction with a tie broken by frequency.
#[test]
fn scenario_lfu_eviction_with_tie() {
    let mut cache = make_lfu::<i32, &str>(2);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.get(&1);
    cache.get(&1);
    cache.get(&2);
    // key 1 is at frequency 3, key 2 is at frequency 2 -- key 2 is lower.
    cache.put(3, "c"); // evicts key 2

    assert_eq!(cache.get(&1), Some(&"a"));
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&3), Some(&"c"));
}

/// Scenario 3: LFU ageing gives a cold key a chance against a hot one.
#[test]
fn scenario_lfu_ageing() {
    let mut cache = make_lfu_with_max_average::<i32, &str>(3, 2);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");

    for _ in 0..10 {
        cache.get(&1);
    }

    let metrics = cache.metrics();
    assert!(
        metrics["age_reductions"] > 0.0,
        "mean frequency should have crossed max_average and triggered ageing"
    );

    // key 1 is still the hottest key and must survive; one of the two
    // cold keys (2 or 3), never touched since insertion, is evicted.
    cache.put(4, "d");
    assert_eq!(cache.get(&1), Some(&"a"), "the hot key must survive ageing");
    let survivors = [cache.get(&2).is_some(), cache.get(&3).is_some()];
    assert_eq!(
        survivors.iter().filter(|hit| **hit).count(),
        1,
        "exactly one of the two cold keys should have been evicted"
    );
}

/// Scenario 4: LRU-K admission filter holds back one-hit wonders.
#[test]
fn scenario_lru_k_filter() {
    let mut cache = make_lru_k::<i32, &str>(2, 4, 3);
    cache.put(1, "a"); // 1st sighting of key 1
    cache.put(2, "b"); // 1st sighting of key 2
    cache.put(3, "c"); // 1st sighting of key 3
    cache.put(1, "a"); // 2nd sighting of key 1
    cache.put(1, "a"); // 3rd sighting reaches k, admitted to main

    assert_eq!(cache.get(&1), Some("a"), "key 1 was promoted to main");
    assert_eq!(cache.get(&2), None, "key 2 never reached k sightings");
}

/// Scenario 5: ARC ghost-list hit rebalances capacity toward T1.
///
/// `get` on a ghost-listed key only resolves the capacity shift: ghost
/// lists store keys, not values, so there is nothing to return. The
/// entry is actually re-admitted to T1 on the next `put` for that key,
/// which now finds `c1` grown and no longer evicts on arrival.
#[test]
fn scenario_arc_ghost_promotion() {
    let mut cache = make_arc::<i32, &str>(2);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c"); // evicts key 1 from T1 into B1
    cache.put(4, "d"); // evicts key 2 from T1 into B1

    assert_eq!(cache.c1(), 2);
    assert_eq!(cache.c2(), 2);

    assert_eq!(cache.get(&1), None, "ghost hit on B1 is still a miss");
    assert_eq!(cache.c1(), 3, "c1 grows at c2's expense on a B1 ghost hit");
    assert_eq!(cache.c2(), 1);

    cache.put(1, "a"); // re-admitted: c1 has room, no eviction needed
    assert_eq!(cache.get(&1), Some("a"));
}

/// Scenario 6: sharded distribution bounds every shard independently.
#[cfg(feature = "concurrent")]
#[test]
fn scenario_sharded_distribution() {
    use adaptive_cache::config::ShardedCacheConfig;
    use adaptive_cache::Sharded;

    let config = ShardedCacheConfig::new(cap(8)).with_shard_count(4);
    let cache: Sharded<i32, i32, LruCache<i32, i32>> =
        Sharded::new(config, |c| LruCache::new(LruCacheConfig::new(c)));

    assert_eq!(cache.config().per_shard_capacity(), 2);

    for key in 0..32 {
        cache.put(key, key);
    }

    assert!(
        cache.len() <= 4 * 2,
        "aggregate size {} exceeded N * ceil(C/N) = 8",
        cache.len()
    );
}
