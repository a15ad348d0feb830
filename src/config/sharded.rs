//! Configuration for the sharded concurrency wrapper.

extern crate std;

use core::fmt;
use core::num::NonZeroUsize;

/// Returns the default number of shards based on available parallelism.
///
/// Matches the hardware-parallelism default used throughout the crate's
/// concurrent configs, clamped to a sane range.
#[inline]
pub fn default_shard_count() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(16)
        .clamp(1, 64)
}

/// Configuration for the sharded concurrency wrapper.
///
/// This is the **only** way to configure a [`Sharded`](crate::Sharded) cache:
/// total capacity is split evenly (rounding up) across `shard_count`
/// independent engine instances, each guarded by its own lock.
///
/// # Examples
///
/// ```
/// use adaptive_cache::config::sharded::ShardedCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = ShardedCacheConfig::new(NonZeroUsize::new(1000).unwrap())
///     .with_shard_count(8);
/// assert_eq!(config.total_capacity().get(), 1000);
/// assert_eq!(config.shard_count(), 8);
/// assert_eq!(config.per_shard_capacity().get(), 125);
/// ```
#[derive(Clone, Copy)]
pub struct ShardedCacheConfig {
    total_capacity: NonZeroUsize,
    shard_count: usize,
}

impl ShardedCacheConfig {
    /// Creates a new sharded config with a hardware-parallelism-based shard count.
    ///
    /// The shard count is clamped to never exceed `total_capacity`, since a
    /// shard with zero capacity is useless.
    #[must_use]
    pub fn new(total_capacity: NonZeroUsize) -> Self {
        let shard_count = default_shard_count().min(total_capacity.get());
        Self {
            total_capacity,
            shard_count,
        }
    }

    /// Sets the shard count explicitly. A value of `0` falls back to the
    /// hardware-parallelism default.
    #[must_use]
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        let shard_count = if shard_count == 0 {
            default_shard_count()
        } else {
            shard_count
        };
        self.shard_count = shard_count.min(self.total_capacity.get()).max(1);
        self
    }

    /// Returns the total capacity across all shards.
    #[inline]
    pub fn total_capacity(&self) -> NonZeroUsize {
        self.total_capacity
    }

    /// Returns the number of independent shards.
    #[inline]
    pub fn shard_count(&self) -> usize {
        self.shard_count
    }

    /// Returns the per-shard capacity, `ceil(total_capacity / shard_count)`.
    #[inline]
    pub fn per_shard_capacity(&self) -> NonZeroUsize {
        let per_shard = self.total_capacity.get().div_ceil(self.shard_count);
        NonZeroUsize::new(per_shard).unwrap_or(NonZeroUsize::new(1).unwrap())
    }
}

impl fmt::Debug for ShardedCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardedCacheConfig")
            .field("total_capacity", &self.total_capacity)
            .field("shard_count", &self.shard_count)
            .field("per_shard_capacity", &self.per_shard_capacity())
            .finish()
    }
}
