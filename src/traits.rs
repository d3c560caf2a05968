//! # Slot Store / Replacement Policy Contract
//!
//! A slot store owns cached payloads addressed by opaque [`SlotIndex`]
//! values. It delegates the choice of *which* slots to drop to a
//! [`ReplacementPolicy`], calling the policy's hooks at fixed points of each
//! slot's lifecycle. When the policy decides to evict, it calls back into
//! the store through the narrow [`SlotStore`] trait.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────┐  on_insert / on_refresh   ┌──────────────────────────┐
//!   │          slot store          │  on_use / on_erase        │    ReplacementPolicy     │
//!   │                              │ ────────────────────────► │                          │
//!   │  payloads keyed by slot id   │                           │  scores, touch order,    │
//!   │                              │  evict_entries(&mut store)│  victim selection        │
//!   │  impl SlotStore              │ ────────────────────────► │                          │
//!   │   configured_capacity()      │                           │                          │
//!   │   erase_payload(slot)  ◄──────────────────────────────── │  (once per victim)       │
//!   └──────────────────────────────┘                           └──────────────────────────┘
//! ```
//!
//! ## Hook Timing
//!
//! | Hook          | Called by the store                                  |
//! |---------------|------------------------------------------------------|
//! | `on_insert`   | after a new entry is admitted                        |
//! | `on_refresh`  | after an existing entry's content is replaced        |
//! | `on_use`      | after a cache hit serves the entry                   |
//! | `on_erase`    | before an entry is removed for unrelated reasons     |
//! | `evict_entries` | after any insertion that may exceed capacity       |
//!
//! Payload bytes and metadata are passed through for policies that want
//! them; LRFU ignores both.
//!
//! ## Thread Safety
//!
//! Hooks take `&mut self` and never block. Callers that share a policy
//! between threads must wrap it (and the store) in their own lock.
//!
//! ## Example Usage
//!
//! ```
//! use lrfukit::policy::lrfu::LrfuPolicy;
//! use lrfukit::traits::{ReplacementPolicy, SlotIndex, SlotStore};
//!
//! struct Store {
//!     capacity: usize,
//!     erased: Vec<SlotIndex>,
//! }
//!
//! impl SlotStore for Store {
//!     fn configured_capacity(&self) -> usize {
//!         self.capacity
//!     }
//!
//!     fn erase_payload(&mut self, slot: SlotIndex) {
//!         self.erased.push(slot);
//!     }
//! }
//!
//! let mut store = Store { capacity: 1, erased: Vec::new() };
//! let mut policy = LrfuPolicy::new(0.5);
//!
//! policy.on_insert(10, b"a", &());
//! policy.on_insert(11, b"b", &());
//! policy.on_use(10, b"a");
//! assert_eq!(policy.evict_entries(&mut store), 1);
//! assert_eq!(store.erased, vec![11]);
//! ```

/// Opaque slot identifier assigned by the enclosing store.
pub type SlotIndex = u64;

/// Capabilities a replacement policy needs from the store it serves.
pub trait SlotStore {
    /// Current maximum number of tracked slots.
    fn configured_capacity(&self) -> usize;

    /// Drops the cached content of `slot`.
    ///
    /// Called exactly once per evicted slot, after the policy has already
    /// discarded its own bookkeeping for it.
    fn erase_payload(&mut self, slot: SlotIndex);
}

/// Lifecycle hooks a slot store drives on its replacement policy.
///
/// `M` is the store's per-entry metadata type; it is handed to the
/// insert/refresh hooks untouched.
pub trait ReplacementPolicy {
    /// A new entry was admitted at `slot`.
    fn on_insert<M: ?Sized>(&mut self, slot: SlotIndex, payload: &[u8], meta: &M);

    /// The content of an existing entry was replaced.
    fn on_refresh<M: ?Sized>(&mut self, slot: SlotIndex, payload: &[u8], meta: &M);

    /// A cache hit served the entry.
    fn on_use(&mut self, slot: SlotIndex, payload: &[u8]);

    /// The entry is about to be removed for reasons unrelated to this policy.
    fn on_erase(&mut self, slot: SlotIndex, payload: &[u8]);

    /// Evicts victims until the tracked population fits the store's
    /// configured capacity. Returns the number of slots evicted.
    fn evict_entries<S: SlotStore + ?Sized>(&mut self, store: &mut S) -> usize;
}
