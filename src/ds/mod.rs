//! Index structures shared by replacement policies.
//!
//! - [`SlotArena`]: vector arena with stable [`SlotId`] handles
//! - [`IntrusiveList`]: arena-backed doubly linked list, O(1) unlink by handle
//! - [`IndexedMinHeap`]: binary min-heap with position tracking for
//!   O(log n) update and arbitrary removal
pub mod indexed_heap;
pub mod intrusive_list;
pub mod slot_arena;

pub use indexed_heap::IndexedMinHeap;
pub use intrusive_list::IntrusiveList;
pub use slot_arena::{SlotArena, SlotId};
