//! Configuration for the LRU-K admission filter.

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU-K cache.
///
/// LRU-K filters one-shot scans out of the hot set by requiring a key to be
/// accessed `k` times before it is admitted into the backing main cache. Keys
/// below that threshold are tracked only in a small history structure.
///
/// # Examples
///
/// ```
/// use adaptive_cache::config::lru_k::LruKCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = LruKCacheConfig::new(
///     NonZeroUsize::new(100).unwrap(),
///     NonZeroUsize::new(400).unwrap(),
///     2,
/// );
/// assert_eq!(config.main_capacity().get(), 100);
/// assert_eq!(config.history_capacity().get(), 400);
/// assert_eq!(config.k(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct LruKCacheConfig {
    main_capacity: NonZeroUsize,
    history_capacity: NonZeroUsize,
    k: u32,
}

impl LruKCacheConfig {
    /// Creates a new LRU-K configuration.
    ///
    /// # Arguments
    /// * `main_capacity` - Maximum number of entries in the admitted (main) cache.
    /// * `history_capacity` - Maximum number of keys tracked before admission.
    /// * `k` - Number of accesses required before a key is admitted to main.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0 — a key can never be admitted at that threshold.
    #[must_use]
    pub fn new(main_capacity: NonZeroUsize, history_capacity: NonZeroUsize, k: u32) -> Self {
        assert!(k > 0, "k must be > 0");
        Self {
            main_capacity,
            history_capacity,
            k,
        }
    }

    /// Returns the maximum number of entries in the main cache.
    #[inline]
    pub fn main_capacity(&self) -> NonZeroUsize {
        self.main_capacity
    }

    /// Returns the maximum number of keys tracked in the history structure.
    #[inline]
    pub fn history_capacity(&self) -> NonZeroUsize {
        self.history_capacity
    }

    /// Returns the number of accesses required before admission to main.
    #[inline]
    pub fn k(&self) -> u32 {
        self.k
    }
}

impl fmt::Debug for LruKCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruKCacheConfig")
            .field("main_capacity", &self.main_capacity)
            .field("history_capacity", &self.history_capacity)
            .field("k", &self.k)
            .finish()
    }
}
