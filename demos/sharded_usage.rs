//! Sharded Cache Usage Examples
//!
//! This example demonstrates multi-threaded usage patterns for the
//! `Sharded` concurrency wrapper around the engine-agnostic cache types.
//!
//! Run with: cargo run --example sharded_usage --features concurrent

extern crate adaptive_cache;

use adaptive_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, ShardedCacheConfig};
use adaptive_cache::{ArcCache, Cache, LfuCache, LruCache, Sharded};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn sharded_lru(total: usize, shards: usize) -> Sharded<String, i32, LruCache<String, i32>> {
    let config = ShardedCacheConfig::new(NonZeroUsize::new(total).unwrap())
        .with_shard_count(shards);
    Sharded::new(config, |cap| LruCache::new(LruCacheConfig::new(cap)))
}

fn main() {
    println!("Sharded Cache Usage Examples");
    println!("=============================\n");

    basic_concurrent_usage();
    println!();

    shard_count_tuning();
    println!();

    all_engine_types();
    println!();

    throughput_comparison();
}

/// Basic multi-threaded usage of a sharded LRU cache.
fn basic_concurrent_usage() {
    println!("1. Basic Sharded Usage");
    println!("   ---------------------");

    let cache = Arc::new(sharded_lru(1000, 16));

    let num_threads = 4;
    let ops_per_thread = 1000;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("thread{thread_id}-key{i}");
                    let value = thread_id * 10000 + i;

                    cache.put(key.clone(), value);
                    if let Some(v) = cache.get(&key) {
                        assert_eq!(v, value);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    println!(
        "   Completed {} operations across {} threads",
        num_threads * ops_per_thread * 2,
        num_threads
    );
    println!("   Final cache size: {} items", cache.len());

    let snapshot = cache.metrics_snapshot();
    println!(
        "   Aggregate metrics: {:?}",
        adaptive_cache::metrics::CacheMetrics::metrics(&snapshot)
    );
}

/// Demonstrate shard count tuning for different workloads.
fn shard_count_tuning() {
    println!("2. Shard Count Tuning");
    println!("   --------------------");

    let default_cache = sharded_lru(10_000, 16);
    println!("   Default cache: {} shards", default_cache.shard_count());

    let high_concurrency = sharded_lru(10_000, 32);
    println!(
        "   High-concurrency cache: {} shards",
        high_concurrency.shard_count()
    );

    let low_contention = sharded_lru(10_000, 4);
    println!(
        "   Low-contention cache: {} shards",
        low_contention.shard_count()
    );

    println!();
    println!("   Shard tuning guidelines:");
    println!("   - More shards = better parallelism, higher memory");
    println!("   - Start with the hardware-parallelism default, increase if contended");
}

/// Wrap every engine type behind the same `Sharded` wrapper.
fn all_engine_types() {
    println!("3. All Engine Types Behind Sharded");
    println!("   ---------------------------------");

    let lru_config = ShardedCacheConfig::new(NonZeroUsize::new(100).unwrap()).with_shard_count(8);
    let lru: Sharded<String, i32, LruCache<String, i32>> =
        Sharded::new(lru_config, |cap| LruCache::new(LruCacheConfig::new(cap)));
    lru.put("key".to_string(), 1);
    println!("   Sharded<LruCache>: recency-based, per-shard ordering");

    let lfu_config = ShardedCacheConfig::new(NonZeroUsize::new(100).unwrap()).with_shard_count(8);
    let lfu: Sharded<String, i32, LfuCache<String, i32>> =
        Sharded::new(lfu_config, |cap| LfuCache::new(LfuCacheConfig::new(cap)));
    lfu.put("key".to_string(), 1);
    println!("   Sharded<LfuCache>: frequency-based, per-shard ordering");

    let arc_config = ShardedCacheConfig::new(NonZeroUsize::new(100).unwrap()).with_shard_count(8);
    let arc: Sharded<String, i32, ArcCache<String, i32>> =
        Sharded::new(arc_config, |cap| ArcCache::new(ArcCacheConfig::new(cap)));
    arc.put("key".to_string(), 1);
    println!("   Sharded<ArcCache>: adaptive recency/frequency, per-shard ordering");
}

/// Compare throughput across different shard counts.
fn throughput_comparison() {
    println!("4. Throughput Comparison (8 threads, 10K ops each)");
    println!("   -------------------------------------------------");

    let ops_per_thread = 10_000;
    let num_threads = 8;

    for shards in [1, 4, 8, 16, 32] {
        let cache = Arc::new(sharded_lru(10_000, shards));

        let start = Instant::now();

        let handles: Vec<_> = (0..num_threads)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let offset = t * ops_per_thread;
                    for i in 0..ops_per_thread {
                        let key = format!("{}", offset + i);
                        cache.put(key.clone(), (offset + i) as i32);
                        cache.get(&key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let elapsed = start.elapsed();
        let total_ops = num_threads * ops_per_thread * 2;
        let ops_per_sec = (total_ops as f64 / elapsed.as_secs_f64()) as u64;

        println!(
            "   {:2} shards: {:>7.2?} ({:>10} ops/sec)",
            shards, elapsed, ops_per_sec
        );
    }

    println!();
    println!("   More shards generally improve throughput up to a point.");
    println!("   Optimal shard count depends on workload and hardware.");
}
