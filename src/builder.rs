//! Cache construction and configuration.
//!
//! `CacheBuilder` validates capacity and decides how much storage to reserve
//! up front. [`LruCache::new`](crate::lru::LruCache::new) is shorthand for
//! `CacheBuilder::new(capacity).try_build()`.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .prealloc(false)
//!     .try_build::<u64, String>()
//!     .unwrap();
//! cache.set(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```
//!
//! | Option     | Default | Description                                      |
//! |------------|---------|--------------------------------------------------|
//! | `capacity` | -       | Maximum entries, must be at least 1              |
//! | `prealloc` | `true`  | Reserve index and arena storage for `capacity`   |

use std::hash::Hash;

use tracing::debug;

use crate::error::ConfigError;
use crate::lru::LruCache;

/// Builder for [`LruCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
    prealloc: bool,
}

impl CacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            prealloc: true,
        }
    }

    /// Reserve storage for the full capacity at build time.
    ///
    /// Disable for large, sparsely filled caches; storage then grows on
    /// demand up to `capacity`.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.prealloc = prealloc;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Validates the configuration and builds the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        if self.capacity < 1 {
            return Err(ConfigError::new("capacity cannot be less than 1"));
        }
        debug!(
            capacity = self.capacity,
            prealloc = self.prealloc,
            "building LRU cache"
        );
        Ok(LruCache::with_storage(self.capacity, self.prealloc))
    }
}
