//! Error types for lrukit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache is configured with an invalid
//!   capacity. This is the only error a caller can observe.
//! - [`InvariantError`]: Returned by `check_invariants` when the index and
//!   the recency list disagree. Reaching it means a bug in lrukit itself.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::lru::LruCache;
//!
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::new(100);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<String, i32>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::lru::LruCache::check_invariants)
/// and [`RecencyOrder::check_invariants`](crate::ds::RecencyOrder::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`LruCache::new`](crate::lru::LruCache::new) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build). No
/// cache is constructed when this is returned.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
///
/// let err = LruCache::<u64, u64>::new(0).unwrap_err();
/// assert_eq!(err.message(), "capacity cannot be less than 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index has 3 keys, order has 2 nodes");
        assert_eq!(err.to_string(), "index has 3 keys, order has 2 nodes");
        assert_eq!(err.message(), "index has 3 keys, order has 2 nodes");
    }

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity cannot be less than 1");
        assert_eq!(err.to_string(), "capacity cannot be less than 1");
        assert!(format!("{:?}", err).contains("capacity"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<InvariantError>();
        assert_error::<ConfigError>();
    }

    #[test]
    fn errors_box_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(ConfigError::new("x"));
        assert_eq!(boxed.to_string(), "x");
    }
}
