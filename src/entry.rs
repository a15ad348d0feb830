//! Unified Cache Entry Type
//!
//! This module provides the `CacheEntry<K, V>` structure used by every engine
//! in the crate. Unlike a size- or metadata-parameterized entry, this entry
//! holds exactly what the data model calls for: a key, a value, and an access
//! counter mutated only by the owning engine.
//!
//! # Usage Examples
//!
//! ```ignore
//! use adaptive_cache::entry::CacheEntry;
//!
//! let entry = CacheEntry::new("key", "value");
//! assert_eq!(entry.access_count, 1);
//! ```

extern crate alloc;

use core::fmt;

/// A resident cache entry: key, value, and an access counter.
///
/// The access counter starts at 1 on insertion (an entry always begins life
/// having been "accessed" by its own `put`) and is incremented by the owning
/// engine on each subsequent hit. LRU engines use it only for diagnostics;
/// LFU-style engines use it as the frequency-bucket key; ARC uses it to
/// decide when a T1 entry should be promoted to T2.
pub struct CacheEntry<K, V> {
    /// The cached key.
    pub key: K,
    /// The cached value.
    pub value: V,
    /// Number of times this entry has been accessed, including its creation.
    pub access_count: u64,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new entry with an access count of 1.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            access_count: 1,
        }
    }

    /// Records an access, incrementing the counter and returning the new value.
    #[inline]
    pub fn touch(&mut self) -> u64 {
        self.access_count = self.access_count.saturating_add(1);
        self.access_count
    }
}

impl<K: Clone, V: Clone> Clone for CacheEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            access_count: self.access_count,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("access_count", &self.access_count)
            .finish()
    }
}
