//! lrukit: a fixed-capacity LRU cache with O(1) `set`/`get`.
//!
//! [`LruCache`](lru::LruCache) pairs a key index with an arena-backed
//! recency list ([`RecencyOrder`](ds::RecencyOrder)). The list owns every
//! entry; the index only stores slot handles into it.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(1)?;
//! cache.set(1, "a");
//! cache.set(2, "b");
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.get(&2), Some(&"b"));
//! # Ok::<(), ConfigError>(())
//! ```

pub mod builder;
pub mod ds;
pub mod entry;
pub mod error;
pub mod lru;
pub mod prelude;
pub mod traits;
