//! MRU→LRU ordering backed by a [`SlotArena`].
//!
//! Nodes live in the arena and link to each other by [`SlotId`], so callers
//! can hold a node's id as a stable handle and move or remove that node in
//! O(1) without walking the list.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head (MRU) ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail (LRU)
//! ```
//!
//! ## Operations
//! - `insert_as_mru(value)`: allocate + attach at head
//! - `promote_to_mru(id)`: unlink + attach at head (no-op when already head)
//! - `update_value(id, value)`: swap value in place + promote
//! - `evict_lru()`: unlink tail + free its slot
//! - `detach(id)`: unlink an arbitrary node + free its slot
//!
//! Every operation above is O(1). `iter` is O(n).
//!
//! The ordering knows nothing about keys; [`LruCache`](crate::lru::LruCache)
//! keeps the key → `SlotId` index on top of it.

use std::mem;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked recency list; head is most recently used, tail least.
#[derive(Debug)]
pub struct RecencyOrder<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> RecencyOrder<T> {
    /// Creates an empty ordering.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty ordering with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of nodes in the ordering.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Most recently used value.
    pub fn mru(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Least recently used value.
    pub fn lru(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn mru_id(&self) -> Option<SlotId> {
        self.head
    }

    pub fn lru_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Iterates values from MRU to LRU.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            order: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Stores `value` in a new node at the head and returns its handle.
    pub fn insert_as_mru(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.link_front(id);
        id
    }

    /// Moves `id` to the head; returns `false` if `id` is not a live node.
    pub fn promote_to_mru(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.unlink(id);
        self.link_front(id);
        true
    }

    /// Replaces the value at `id`, promotes it, and returns the old value.
    pub fn update_value(&mut self, id: SlotId, value: T) -> Option<T> {
        let node = self.arena.get_mut(id)?;
        let old = mem::replace(&mut node.value, value);
        self.promote_to_mru(id);
        Some(old)
    }

    /// Removes the tail node and returns its value.
    pub fn evict_lru(&mut self) -> Option<T> {
        let id = self.tail?;
        self.detach(id)
    }

    /// Removes an arbitrary node and returns its value.
    pub fn detach(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Walks the links in both directions and checks them against `len()`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.len();
        match (self.head, self.tail) {
            (None, None) if len == 0 => return Ok(()),
            (None, None) => {
                return Err(InvariantError::new(format!(
                    "empty head/tail with {len} live nodes"
                )));
            },
            (Some(_), None) | (None, Some(_)) => {
                return Err(InvariantError::new("exactly one of head/tail is set"));
            },
            (Some(_), Some(_)) => {},
        }

        let mut steps = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("forward walk hit stale {id:?}")))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "{id:?}.prev is {:?}, expected {prev:?}",
                    node.prev
                )));
            }
            steps += 1;
            if steps > len {
                return Err(InvariantError::new("forward walk exceeds len (cycle)"));
            }
            prev = Some(id);
            current = node.next;
        }
        if prev != self.tail {
            return Err(InvariantError::new(format!(
                "forward walk ended at {prev:?}, tail is {:?}",
                self.tail
            )));
        }
        if steps != len {
            return Err(InvariantError::new(format!(
                "forward walk saw {steps} nodes, len is {len}"
            )));
        }

        let mut steps = 0usize;
        let mut current = self.tail;
        let mut last = None;
        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("backward walk hit stale {id:?}")))?;
            steps += 1;
            if steps > len {
                return Err(InvariantError::new("backward walk exceeds len (cycle)"));
            }
            last = Some(id);
            current = node.prev;
        }
        if last != self.head || steps != len {
            return Err(InvariantError::new(format!(
                "backward walk saw {steps} nodes ending at {last:?}, head is {:?}",
                self.head
            )));
        }
        Ok(())
    }

    fn unlink(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
        Some(())
    }

    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(old_id) => {
                if let Some(old_node) = self.arena.get_mut(old_id) {
                    old_node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

impl<T> Default for RecencyOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// MRU→LRU iterator over a [`RecencyOrder`].
pub struct Iter<'a, T> {
    order: &'a RecencyOrder<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.order.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
