//! # Cache Trait
//!
//! The two-call contract every lrukit cache satisfies: `set` a value and
//! `get` it back, with read-only introspection alongside.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │              Cache<K, V>                │
//!   │                                         │
//!   │  set(&mut, K, V) → Option<V>            │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! `get` takes `&mut self` because a hit counts as a use and reorders the
//! cache. `contains` is the non-reordering membership check.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::lru::LruCache;
//! use lrukit::traits::Cache;
//!
//! fn warm<C: Cache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.set(*key, value.to_string());
//!     }
//! }
//!
//! let mut cache = LruCache::new(2).unwrap();
//! warm(&mut cache, &[(1, "a"), (2, "b"), (3, "c")]);
//! assert_eq!(Cache::len(&cache), 2);
//! assert!(!Cache::contains(&cache, &1));
//! ```

/// Key-value cache with a bounded number of entries.
pub trait Cache<K, V> {
    /// Stores `value` under `key`, returning the value it replaced.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key`, counting the lookup as a use.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is present, without counting it as a use.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries the cache holds before evicting.
    fn capacity(&self) -> usize;
}
