//! Touch-ordered set of live slots.
//!
//! Slots are kept oldest-touch first. The list answers population size in
//! O(1) and unlinks a slot in O(1) through the handle stored per slot; it
//! plays no part in scoring.
//!
//! ```text
//!   handles: { 17 → id_0, 4 → id_2, 9 → id_1 }
//!
//!   front ─► [17] ◄──► [4] ◄──► [9] ◄── back
//!           oldest              newest touch
//! ```

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::traits::SlotIndex;

#[derive(Debug, Default)]
pub struct TouchList {
    order: IntrusiveList<SlotIndex>,
    handles: FxHashMap<SlotIndex, SlotId>,
}

impl TouchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: IntrusiveList::with_capacity(capacity),
            handles: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.handles.contains_key(&slot)
    }

    /// Places `slot` at the back, appending it if it is not yet present.
    pub fn append(&mut self, slot: SlotIndex) {
        if let Some(&id) = self.handles.get(&slot) {
            self.order.move_to_back(id);
            return;
        }
        let id = self.order.push_back(slot);
        self.handles.insert(slot, id);
    }

    /// Moves a present slot to the back; returns `false` if absent.
    pub fn touch(&mut self, slot: SlotIndex) -> bool {
        match self.handles.get(&slot) {
            Some(&id) => self.order.move_to_back(id),
            None => false,
        }
    }

    /// Unlinks `slot`; returns `false` if absent.
    pub fn remove(&mut self, slot: SlotIndex) -> bool {
        match self.handles.remove(&slot) {
            Some(id) => self.order.remove(id).is_some(),
            None => false,
        }
    }

    /// The least recently touched slot.
    pub fn oldest(&self) -> Option<SlotIndex> {
        self.order.front().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.handles.clear();
    }

    /// Slots from oldest to newest touch.
    pub fn iter(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.order.iter().copied()
    }

    pub fn approx_bytes(&self) -> usize {
        self.order.approx_bytes()
            + self.handles.capacity() * std::mem::size_of::<(SlotIndex, SlotId)>()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.order.len(), self.handles.len());
        for (slot, id) in &self.handles {
            assert_eq!(self.order.get(*id), Some(slot));
        }
    }
}
