//! Policy Facade
//!
//! Every single-threaded eviction policy in this crate — LRU, LFU, LRU-K,
//! and ARC — implements the same narrow contract. Callers that only need
//! `put`/`get` can be generic over `Cache<K, V>` and swap policies without
//! touching call sites.
//!
//! [`Sharded`](crate::sharded::Sharded) is built generically over any
//! `E: Cache<K, V>` and wraps one, but does not itself implement `Cache`:
//! its `put`/`get`/`remove`/`clear` take `&self`, not `&mut self`, since
//! each call only needs to lock the one shard it routes to. A shared
//! `&self`-based contract would be a different trait; this one is for the
//! engines a shard can hold, not for the shard itself.
//!
//! This replaces the virtual-interface idiom a hosted implementation might
//! use with a plain trait: no vtable is paid for in the hot path once a
//! caller monomorphises over a concrete engine type.

/// Uniform `put`/`get` contract implemented by every single-threaded cache
/// engine (not by [`Sharded`](crate::sharded::Sharded), which is `&self`-based).
///
/// No method in this trait returns `Result`: a miss is a normal outcome
/// (`None`), not an error, and a `put` never fails — it silently evicts or
/// no-ops on a zero-capacity cache. Implementations return values by clone
/// rather than by reference so the same trait works regardless of whether
/// the underlying engine exposes borrowed access internally.
pub trait Cache<K, V> {
    /// Stores `value` under `key`. A no-op if the cache has zero capacity.
    fn put(&mut self, key: K, value: V);

    /// Returns a clone of the value stored under `key`, or `None` on a miss.
    ///
    /// A hit updates the engine's internal ordering (recency, frequency, or
    /// ARC promotion state) exactly as it would for any other access.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Removes `key` from the cache, returning its value if present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of resident entries.
    fn len(&self) -> usize;

    /// Whether the cache currently holds no resident entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every resident entry.
    fn clear(&mut self);
}
