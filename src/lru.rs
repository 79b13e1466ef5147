//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity key-value cache that evicts the least recently used entry
//! when a new key would exceed capacity. Both `get` and `set` count as a use.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                           LruCache<K, V>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (index, non-owning handles)           │   │
//!   │   │                                                              │   │
//!   │   │   key_1 ───────────────────────────────────────────┐         │   │
//!   │   │   key_2 ─────────────────────────────┐             │         │   │
//!   │   │   key_3 ───────────────┐             │             │         │   │
//!   │   └────────────────────────┼─────────────┼─────────────┼─────────┘   │
//!   │                            ▼             ▼             ▼             │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  RecencyOrder<Entry<K, V>>  (owns every entry)               │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [key_3] ◄──► [key_2] ◄──► [key_1] ◄── tail         │   │
//!   │   │   (MRU)                                         (LRU)        │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   set(D) on a full cache (capacity = 3)
//!   ═══════════════════════════════════════════════════════════════
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!     1. index miss for D
//!     2. evict_lru() returns Entry{C}; index.remove(C)
//!     3. insert_as_mru(Entry{D}); index.insert(D, id)
//!
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   get(B)
//!   ═══════════════════════════════════════════════════════════════
//!     1. index hit for B: O(1)
//!     2. promote_to_mru(id_B): O(1)
//!
//!     head ──► [B] ◄──► [D] ◄──► [A] ◄── tail
//! ```
//!
//! ## Invariants
//!
//! - `index.len() == order.len() <= capacity`
//! - every index entry resolves to a live node whose entry has the same key
//! - `capacity >= 1`, enforced at construction
//!
//! `check_invariants()` verifies all of the above plus the link invariants of
//! [`RecencyOrder`].
//!
//! ## Example
//!
//! ```
//! use lrukit::lru::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.set(1, "v1");
//! cache.set(2, "v2");
//! cache.get(&1);
//! cache.set(3, "v3");
//!
//! assert_eq!(cache.get(&1), Some(&"v1"));
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&3), Some(&"v3"));
//! ```
//!
//! ## Thread Safety
//!
//! `LruCache` is not synchronized. Every mutating call, `get` included, takes
//! `&mut self`; share it across threads behind an external lock.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::builder::CacheBuilder;
use crate::ds::recency_order::RecencyOrder;
use crate::ds::slot_arena::SlotId;
use crate::entry::Entry;
use crate::error::{ConfigError, InvariantError};
use crate::traits::Cache;

/// Fixed-capacity LRU cache.
pub struct LruCache<K, V> {
    index: FxHashMap<K, SlotId>,
    order: RecencyOrder<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    ///
    /// let cache: LruCache<u64, String> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    ///
    /// assert!(LruCache::<u64, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        CacheBuilder::new(capacity).try_build()
    }

    /// Builds the cache after the builder has validated `capacity`.
    pub(crate) fn with_storage(capacity: usize, prealloc: bool) -> Self {
        let reserve = if prealloc { capacity } else { 0 };
        Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            order: RecencyOrder::with_capacity(reserve),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is cached. Does not refresh recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// An existing key has its value replaced in place and the old value is
    /// returned; nothing is evicted. A new key on a full cache first evicts
    /// the least recently used entry.
    ///
    /// ```
    /// use lrukit::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// assert_eq!(cache.set(1, "a"), None);
    /// assert_eq!(cache.set(1, "A"), Some("a"));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            return self
                .order
                .update_value(id, Entry::new(key, value))
                .map(Entry::into_value);
        }

        if self.order.len() >= self.capacity {
            self.evict_lru_entry();
        }

        let id = self.order.insert_as_mru(Entry::new(key.clone(), value));
        self.index.insert(key, id);
        None
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.order.promote_to_mru(id);
        self.order.get(id).map(Entry::value)
    }

    /// Returns the value for `key` without refreshing recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.order.get(id).map(Entry::value)
    }

    /// Removes `key` from the cache and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.order.detach(id).map(Entry::into_value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.evict_lru_entry().map(Entry::into_parts)
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.lru().map(|entry| (entry.key(), entry.value()))
    }

    /// Iterates entries from most to least recently used without reordering.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.order.iter().map(|entry| (entry.key(), entry.value()))
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        let dropped = self.order.len();
        self.index.clear();
        self.order.clear();
        trace!(dropped, capacity = self.capacity, "cleared LRU cache");
    }

    /// Checks index/order agreement and the recency list links.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.order.check_invariants()?;

        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys, order has {} nodes",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.order.len(),
                self.capacity
            )));
        }
        for (key, &id) in &self.index {
            let entry = self
                .order
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("index points at stale {id:?}")))?;
            if entry.key() != key {
                return Err(InvariantError::new(format!(
                    "{id:?} holds a different key than its index entry"
                )));
            }
        }
        Ok(())
    }

    fn evict_lru_entry(&mut self) -> Option<Entry<K, V>> {
        let evicted = self.order.evict_lru()?;
        self.index.remove(evicted.key());
        trace!(
            len = self.order.len(),
            capacity = self.capacity,
            "evicted least recently used entry"
        );
        Some(evicted)
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn set(&mut self, key: K, value: V) -> Option<V> {
        LruCache::set(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<_> = self
            .order
            .iter()
            .map(|entry| (entry.key(), entry.value()))
            .collect();
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.order.len())
            .field("mru_to_lru", &entries)
            .finish()
    }
}
