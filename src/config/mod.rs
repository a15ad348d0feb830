//! Cache Configuration Module
//!
//! This module provides configuration structures for all cache algorithm
//! implementations. Each cache type has its own dedicated configuration
//! struct that encapsulates algorithm-specific parameters.
//!
//! # Design Philosophy
//!
//! Each cache is created using its configuration struct as the **single entry
//! point**. This provides several benefits:
//!
//! - **Consistent API**: all caches are built from a config the same way.
//! - **Builder pattern**: optional parameters use fluent builder methods.
//! - **Type safety**: required parameters must be provided at construction.
//! - **Extensible**: new parameters can be added without breaking existing code.
//!
//! # Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | [`LruCacheConfig`] | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | [`LfuCacheConfig`] | [`LfuCache`](crate::LfuCache) | Least Frequently Used, with ageing |
//! | [`LruKCacheConfig`] | [`LruKCache`](crate::LruKCache) | LRU-K admission filter |
//! | [`ArcCacheConfig`] | [`ArcCache`](crate::ArcCache) | Adaptive Replacement Cache |
//! | [`ShardedCacheConfig`] | [`Sharded`](crate::Sharded) | Sharded concurrency wrapper (requires `concurrent`) |
//!
//! # Examples
//!
//! ```
//! use adaptive_cache::config::LruCacheConfig;
//! use adaptive_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig::new(NonZeroUsize::new(1000).unwrap());
//! let cache: LruCache<String, i32> = LruCache::new(config);
//! ```

pub mod arc;
pub mod lfu;
pub mod lru;
pub mod lru_k;

#[cfg(feature = "concurrent")]
pub mod sharded;

pub use arc::ArcCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;
pub use lru_k::LruKCacheConfig;

#[cfg(feature = "concurrent")]
pub use sharded::ShardedCacheConfig;
