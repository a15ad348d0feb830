//! Configuration for the Least Frequently Used (LFU) cache.

use core::fmt;
use core::num::NonZeroUsize;

/// Default `maxAverage` threshold that triggers frequency ageing.
pub const DEFAULT_MAX_AVERAGE: u64 = 10;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// LFU tracks the frequency of access for each item and evicts the least
/// frequently used items when the cache reaches capacity. `max_average`
/// bounds how high the average frequency may climb before every entry's
/// counter is halved, letting once-hot keys age out instead of becoming
/// immortal.
///
/// # Examples
///
/// ```
/// use adaptive_cache::config::lfu::LfuCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = LfuCacheConfig::new(NonZeroUsize::new(100).unwrap());
/// assert_eq!(config.capacity().get(), 100);
/// assert_eq!(config.max_average(), 10);
///
/// let config = config.with_max_average(25);
/// assert_eq!(config.max_average(), 25);
/// ```
#[derive(Clone, Copy)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    capacity: NonZeroUsize,
    /// Average frequency threshold that triggers ageing.
    max_average: u64,
}

impl LfuCacheConfig {
    /// Creates a new configuration with the default `maxAverage` of 10.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of key-value pairs the cache can hold.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            max_average: DEFAULT_MAX_AVERAGE,
        }
    }

    /// Sets the average-frequency threshold that triggers ageing.
    #[must_use]
    pub fn with_max_average(mut self, max_average: u64) -> Self {
        self.max_average = max_average.max(1);
        self
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the average-frequency threshold that triggers ageing.
    #[inline]
    pub fn max_average(&self) -> u64 {
        self.max_average
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .field("max_average", &self.max_average)
            .finish()
    }
}
