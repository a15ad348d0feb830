//! Concurrent Cache Benchmarks
//!
//! Benchmarks for measuring sharded cache performance across different
//! access patterns and shard counts.

use adaptive_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, ShardedCacheConfig};
use adaptive_cache::{ArcCache, Cache, LfuCache, LruCache, Sharded};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

const CACHE_SIZE: usize = 10_000;
const OPS_PER_THREAD: usize = 1_000;

fn cap(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn sharded_lru(total: usize, shards: usize) -> Sharded<usize, usize, LruCache<usize, usize>> {
    let config = ShardedCacheConfig::new(cap(total)).with_shard_count(shards);
    Sharded::new(config, |c| LruCache::new(LruCacheConfig::new(c)))
}

fn sharded_lfu(total: usize, shards: usize) -> Sharded<usize, usize, LfuCache<usize, usize>> {
    let config = ShardedCacheConfig::new(cap(total)).with_shard_count(shards);
    Sharded::new(config, |c| LfuCache::new(LfuCacheConfig::new(c)))
}

fn sharded_arc(total: usize, shards: usize) -> Sharded<usize, usize, ArcCache<usize, usize>> {
    let config = ShardedCacheConfig::new(cap(total)).with_shard_count(shards);
    Sharded::new(config, |c| ArcCache::new(ArcCacheConfig::new(c)))
}

/// Benchmark concurrent read operations across every engine, sharded 16 ways.
fn concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Reads");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    let lru_cache = Arc::new(sharded_lru(CACHE_SIZE, 16));
    let lfu_cache = Arc::new(sharded_lfu(CACHE_SIZE, 16));
    let arc_cache = Arc::new(sharded_arc(CACHE_SIZE, 16));

    for i in 0..CACHE_SIZE {
        lru_cache.put(i, i);
        lfu_cache.put(i, i);
        arc_cache.put(i, i);
    }

    group.bench_function("LRU", |b| {
        b.iter(|| {
            let cache = Arc::clone(&lru_cache);
            run_concurrent_reads(cache, 8, OPS_PER_THREAD);
        });
    });

    group.bench_function("LFU", |b| {
        b.iter(|| {
            let cache = Arc::clone(&lfu_cache);
            run_concurrent_reads(cache, 8, OPS_PER_THREAD);
        });
    });

    group.bench_function("ARC", |b| {
        b.iter(|| {
            let cache = Arc::clone(&arc_cache);
            run_concurrent_reads(cache, 8, OPS_PER_THREAD);
        });
    });

    group.finish();
}

/// Benchmark concurrent write operations across every engine.
fn concurrent_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Writes");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    group.bench_function("LRU", |b| {
        let cache = Arc::new(sharded_lru(CACHE_SIZE, 16));
        b.iter(|| {
            let cache = Arc::clone(&cache);
            run_concurrent_writes(cache, 8, OPS_PER_THREAD);
        });
    });

    group.bench_function("LFU", |b| {
        let cache = Arc::new(sharded_lfu(CACHE_SIZE, 16));
        b.iter(|| {
            let cache = Arc::clone(&cache);
            run_concurrent_writes(cache, 8, OPS_PER_THREAD);
        });
    });

    group.bench_function("ARC", |b| {
        let cache = Arc::new(sharded_arc(CACHE_SIZE, 16));
        b.iter(|| {
            let cache = Arc::clone(&cache);
            run_concurrent_writes(cache, 8, OPS_PER_THREAD);
        });
    });

    group.finish();
}

/// Benchmark mixed read/write operations (80% reads, 20% writes).
fn concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Mixed (80/20)");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    group.bench_function("LRU", |b| {
        let cache = Arc::new(sharded_lru(CACHE_SIZE, 16));
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }
        b.iter(|| {
            let cache = Arc::clone(&cache);
            run_concurrent_mixed(cache, 8, OPS_PER_THREAD);
        });
    });

    group.bench_function("LFU", |b| {
        let cache = Arc::new(sharded_lfu(CACHE_SIZE, 16));
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }
        b.iter(|| {
            let cache = Arc::clone(&cache);
            run_concurrent_mixed(cache, 8, OPS_PER_THREAD);
        });
    });

    group.bench_function("ARC", |b| {
        let cache = Arc::new(sharded_arc(CACHE_SIZE, 16));
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }
        b.iter(|| {
            let cache = Arc::clone(&cache);
            run_concurrent_mixed(cache, 8, OPS_PER_THREAD);
        });
    });

    group.finish();
}

/// Benchmark different shard counts for the LRU engine.
fn shard_count_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shard Count Comparison (LRU)");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    for shards in [1, 4, 8, 16, 32, 64] {
        group.bench_with_input(
            BenchmarkId::new("shards", shards),
            &shards,
            |b, &shard_count| {
                let cache = Arc::new(sharded_lru(CACHE_SIZE, shard_count));
                for i in 0..CACHE_SIZE {
                    cache.put(i, i);
                }
                b.iter(|| {
                    let cache = Arc::clone(&cache);
                    run_concurrent_mixed(cache, 8, OPS_PER_THREAD);
                });
            },
        );
    }

    group.finish();
}

fn run_concurrent_reads<E>(cache: Arc<Sharded<usize, usize, E>>, num_threads: usize, ops_per_thread: usize)
where
    E: Cache<usize, usize> + Send + 'static,
{
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..ops_per_thread {
                let key = (t * ops_per_thread + i) % CACHE_SIZE;
                black_box(cache.get(&key));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

fn run_concurrent_writes<E>(cache: Arc<Sharded<usize, usize, E>>, num_threads: usize, ops_per_thread: usize)
where
    E: Cache<usize, usize> + Send + 'static,
{
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..ops_per_thread {
                let key = t * ops_per_thread + i;
                cache.put(key, key);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

fn run_concurrent_mixed<E>(cache: Arc<Sharded<usize, usize, E>>, num_threads: usize, ops_per_thread: usize)
where
    E: Cache<usize, usize> + Send + 'static,
{
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..ops_per_thread {
                let key = (t * ops_per_thread + i) % CACHE_SIZE;
                if i % 5 == 0 {
                    cache.put(key, key);
                } else {
                    black_box(cache.get(&key));
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

criterion_group!(
    benches,
    concurrent_reads,
    concurrent_writes,
    concurrent_mixed,
    shard_count_comparison
);
criterion_main!(benches);
