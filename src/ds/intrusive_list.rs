//! Doubly linked list backed by [`SlotArena`].
//!
//! Nodes live in a `SlotArena` and are linked by [`SlotId`], so a handle
//! returned by [`push_back`](IntrusiveList::push_back) stays valid until the
//! node is removed and supports O(1) unlink without walking the list.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_0   │ { value: 17, prev: None, next: Some(id_2) } │
//!   │ id_2   │ { value: 4,  prev: Some(id_0), next: id_1 } │
//!   │ id_1   │ { value: 9,  prev: Some(id_2), next: None } │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_0] ◄──► [id_2] ◄──► [id_1] ◄── tail
//!   (oldest)                              (newest)
//! ```
//!
//! ## Performance
//! - `push_back` / `pop_front`: O(1)
//! - `remove(id)` / `move_to_back(id)`: O(1)
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Linked list whose nodes are addressed by stable [`SlotId`] handles.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front (oldest) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the value at the back (newest) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> IntrusiveListIdIter<'_, T> {
        IntrusiveListIdIter {
            list: self,
            current: self.head,
        }
    }

    /// Appends a node at the back and returns its handle.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.arena.get_mut(tail) {
                    node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Unlinks node `id` and returns its value; `None` if the handle is stale.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the back; returns `false` if `id` is not present.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.tail {
            return true;
        }
        self.detach(id);
        self.attach_back(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.arena.approx_bytes()
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
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

    fn attach_back(&mut self, id: SlotId) -> Option<()> {
        let old_tail = self.tail;
        let node = self.arena.get_mut(id)?;
        node.next = None;
        node.prev = old_tail;
        match old_tail {
            Some(old_tail) => {
                if let Some(tail_node) = self.arena.get_mut(old_tail) {
                    tail_node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        Some(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let node = self.arena.get(id).expect("node missing");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over values from front to back.
pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Iterator over SlotIds from front to back.
pub struct IntrusiveListIdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrusive_list_push_back_keeps_order() {
        let mut list = IntrusiveList::new();
        list.push_back(1u64);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_move_to_back_edges() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_back(c));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        assert!(list.move_to_back(a));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "c", "a"]);

        assert!(list.move_to_back(c));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(list.front(), Some(&"b"));
        assert!(list.contains(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_remove_middle_and_ends() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_stale_handle_is_rejected() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(5u64);
        assert_eq!(list.remove(a), Some(5));
        assert_eq!(list.remove(a), None);
        assert!(!list.move_to_back(a));
        assert!(list.is_empty());
    }

    #[test]
    fn intrusive_list_pop_front_and_clear() {
        let mut list = IntrusiveList::new();
        list.push_back(1u64);
        list.push_back(2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 1);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn intrusive_list_iter_ids_match_values() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(10u64);
        let b = list.push_back(20);
        let ids: Vec<_> = list.iter_ids().collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(list.get(a), Some(&10));
    }
}
