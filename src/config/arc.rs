//! Configuration for the Adaptive Replacement Cache (ARC).

use core::fmt;
use core::num::NonZeroUsize;

/// Default access count at which ARC promotes an entry from T1 to T2.
pub const DEFAULT_TRANSFORM_THRESHOLD: u64 = 2;

/// Configuration for an ARC (Adaptive Replacement Cache).
///
/// `capacity` is applied to each of ARC's two sub-caches (T1 and T2)
/// independently at construction, so steady-state residency can reach
/// `2 * capacity`; this mirrors the observed behavior of the cache this
/// design is grown from and is preserved deliberately (see `DESIGN.md`).
///
/// # Examples
///
/// ```
/// use adaptive_cache::config::arc::ArcCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = ArcCacheConfig::new(NonZeroUsize::new(64).unwrap());
/// assert_eq!(config.capacity().get(), 64);
/// assert_eq!(config.transform_threshold(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct ArcCacheConfig {
    capacity: NonZeroUsize,
    transform_threshold: u64,
}

impl ArcCacheConfig {
    /// Creates a new ARC configuration with the default transform threshold of 2.
    ///
    /// # Arguments
    /// * `capacity` - Initial capacity applied to each sub-cache (T1 and T2).
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            transform_threshold: DEFAULT_TRANSFORM_THRESHOLD,
        }
    }

    /// Sets the access count at which a T1 entry is promoted to T2.
    #[must_use]
    pub fn with_transform_threshold(mut self, threshold: u64) -> Self {
        self.transform_threshold = threshold.max(1);
        self
    }

    /// Returns the per-sub-cache capacity.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the transform threshold.
    #[inline]
    pub fn transform_threshold(&self) -> u64 {
        self.transform_threshold
    }
}

impl fmt::Debug for ArcCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcCacheConfig")
            .field("capacity", &self.capacity)
            .field("transform_threshold", &self.transform_threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_threshold_is_two() {
        let config = ArcCacheConfig::new(NonZeroUsize::new(10).unwrap());
        assert_eq!(config.transform_threshold(), 2);
    }

    #[test]
    fn with_transform_threshold_overrides_default() {
        let config =
            ArcCacheConfig::new(NonZeroUsize::new(10).unwrap()).with_transform_threshold(5);
        assert_eq!(config.transform_threshold(), 5);
    }
}
