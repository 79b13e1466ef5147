//! Slot storage with stable integer handles.
//!
//! `SlotArena` hands out a [`SlotId`] for every inserted value. The id stays
//! valid until the value is removed, after which the slot is threaded onto an
//! internal free list and reused by the next insert.
//!
//! ```text
//!   slots: [ Occupied(A) | Vacant(next: 3) | Occupied(C) | Vacant(next: -) ]
//!                              ▲
//!   free_head ─────────────────┘
//! ```
//!
//! All operations are O(1). Ids are plain indices, so a removed id may alias
//! a later insert; owners are expected to drop their ids on removal.

use std::mem;

/// Stable handle to a value stored in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Vector of slots plus an intrusive free list of vacant indices.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value`, reusing a vacant slot when one is available.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free_head {
            Some(idx) => {
                let slot = &mut self.slots[idx];
                if let Slot::Vacant { next_free } = slot {
                    self.free_head = *next_free;
                }
                *slot = Slot::Occupied(value);
                idx
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Removes and returns the value at `id`; `None` if the slot is vacant.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if !matches!(slot, Slot::Occupied(_)) {
            return None;
        }
        let taken = mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match taken {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Occupied(_)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the backing vector can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every value and forgets the free list. Backing storage is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_reuses_slot() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));

        let c = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(c), Some(&"c"));
        assert_eq!(a.index(), c.index());
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.insert(i)).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        assert_eq!(arena.insert(10).index(), ids[3].index());
        assert_eq!(arena.insert(11).index(), ids[1].index());
        assert_eq!(arena.insert(12).index(), 4);
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn double_remove_is_rejected() {
        let mut arena = SlotArena::new();
        let id = arena.insert(7);
        assert_eq!(arena.remove(id), Some(7));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.len(), 0);

        // the free list must not contain the slot twice
        let a = arena.insert(1);
        let b = arena.insert(2);
        assert_ne!(a, b);
    }

    #[test]
    fn out_of_range_ids_are_absent() {
        let mut arena: SlotArena<u8> = SlotArena::new();
        let bogus = SlotId(42);
        assert!(!arena.contains(bogus));
        assert_eq!(arena.get(bogus), None);
        assert_eq!(arena.get_mut(bogus), None);
        assert_eq!(arena.remove(bogus), None);
    }

    #[test]
    fn get_mut_and_clear() {
        let mut arena = SlotArena::with_capacity(4);
        let id = arena.insert(1);
        if let Some(v) = arena.get_mut(id) {
            *v = 5;
        }
        assert_eq!(arena.get(id), Some(&5));
        assert!(arena.capacity() >= 4);

        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(id));
        assert_eq!(arena.insert(9).index(), 0);
    }
}
