//! # LRFU Replacement Policy
//!
//! Scores every tracked slot with a single combined recency/frequency value
//! (CRF) that decays exponentially in logical time, and keeps the slot with
//! the lowest score reachable in O(1) (removable in O(log n)) so eviction
//! never scans.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                             LrfuPolicy                                   │
//!   │                                                                          │
//!   │   ┌────────────────────────┐   ┌───────────────────────────────────────┐ │
//!   │   │  ScoreClock            │   │  ScoreTable                           │ │
//!   │   │                        │   │                                       │ │
//!   │   │  λ      = 0.5          │   │  ┌──────┬────────┬──────────────┐     │ │
//!   │   │  count  = 5            │   │  │ slot │ score  │ last touched │     │ │
//!   │   │                        │   │  ├──────┼────────┼──────────────┤     │ │
//!   │   │  weight(v)=0.5^(λ·v)   │   │  │  17  │ 0.7071 │      1       │     │ │
//!   │   └────────────────────────┘   │  │   4  │ 1.0000 │      5       │     │ │
//!   │                                │  │   9  │ 0.3536 │      3       │     │ │
//!   │                                │  └──────┴────────┴──────────────┘     │ │
//!   │                                └───────────────────────────────────────┘ │
//!   │                                                                          │
//!   │   ┌────────────────────────────────┐  ┌──────────────────────────────┐   │
//!   │   │  TouchList (oldest → newest)   │  │  IndexedMinHeap<SlotIndex>   │   │
//!   │   │                                │  │                              │   │
//!   │   │   [17] ◄──► [9] ◄──► [4]       │  │        (9, 0.3536)           │   │
//!   │   │                                │  │        /          \          │   │
//!   │   │   len() = population           │  │  (17, 0.7071)   (4, 1.0)     │   │
//!   │   └────────────────────────────────┘  └──────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Table, touch list and heap always hold the same slot set, and each heap
//! entry's score equals the table's stored score for that slot.
//!
//! ## Scoring
//!
//! ```text
//!   on_insert:           count += 1
//!                        score  = weight(count)
//!
//!   on_refresh/on_use:   count += 1
//!                        w      = weight(0)            (always 1.0 for λ ∈ [0,1])
//!                        score  = 1.0                  if w == 1.0
//!                               = w + current_score    otherwise
//!
//!   current_score(slot)  = weight(count - last_touched_at) · stored score
//! ```
//!
//! The insertion offset is the clock value itself, so a newly admitted
//! slot starts lower the more activity the policy has already seen, and any
//! slot that has been referenced at least once sits at 1.0. With the
//! accumulate branch unreachable, refresh/use reset a slot to 1.0 rather
//! than adding to its decayed history.
//!
//! ## Eviction
//!
//! ```text
//!   evict_entries(store):
//!     capacity = store.configured_capacity()
//!     while touch_list.len() > capacity:
//!       heap empty?  → warn, stop
//!       (slot, score) = heap.pop_min()
//!       drop slot from touch list and score table
//!       store.erase_payload(slot)
//! ```
//!
//! ## Core Operations
//!
//! | Method              | Complexity | Description                              |
//! |---------------------|------------|------------------------------------------|
//! | `on_insert`         | O(log n)   | Track a new slot                         |
//! | `on_refresh`        | O(log n)   | Re-score after content replacement       |
//! | `on_use`            | O(log n)   | Re-score after a cache hit               |
//! | `on_erase`          | O(log n)   | Stop tracking a slot                     |
//! | `evict_entries`     | O(k log n) | Evict k lowest-score slots               |
//! | `peek_victim`       | O(1)       | Lowest-score slot without removing it    |
//! | `score_of`          | O(1)       | Stored score                             |
//! | `current_score`     | O(1)       | Stored score decayed to the current tick |
//! | `check_invariants`  | O(n)       | Verify the three structures agree        |
//!
//! ## Example Usage
//!
//! ```
//! use lrfukit::policy::lrfu::LrfuPolicy;
//! use lrfukit::traits::{ReplacementPolicy, SlotIndex, SlotStore};
//!
//! struct Store(Vec<SlotIndex>);
//!
//! impl SlotStore for Store {
//!     fn configured_capacity(&self) -> usize {
//!         2
//!     }
//!
//!     fn erase_payload(&mut self, slot: SlotIndex) {
//!         self.0.push(slot);
//!     }
//! }
//!
//! let mut policy = LrfuPolicy::new(0.5);
//! let mut store = Store(Vec::new());
//!
//! for slot in [1, 2, 3] {
//!     policy.on_insert(slot, &[], &());
//! }
//! policy.on_use(1, &[]);
//!
//! assert_eq!(policy.score_of(1), Some(1.0));
//! assert_eq!(policy.evict_entries(&mut store), 1);
//! assert_eq!(store.0, vec![3]);
//! assert_eq!(policy.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! - `LrfuPolicy` is **NOT thread-safe**; every hook takes `&mut self`
//! - Wrap the store and policy together in one lock for concurrent access

pub mod clock;
pub mod table;
pub mod touch_list;

use tracing::{debug, trace, warn};

use crate::builder::LrfuConfig;
use crate::ds::IndexedMinHeap;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LrfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LrfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{LrfuMetricsRecorder, MetricsSnapshotProvider};
use crate::traits::{ReplacementPolicy, SlotIndex, SlotStore};

pub use clock::ScoreClock;
pub use table::{ScoreRecord, ScoreTable};
pub use touch_list::TouchList;

/// Which lifecycle hook re-scored a slot; only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Refresh,
    Use,
}

/// LRFU scoring engine for a slot store.
///
/// Owns the logical clock and the three mirrored per-slot structures. See
/// the module-level documentation for the scoring rules.
#[derive(Debug)]
pub struct LrfuPolicy {
    clock: ScoreClock,
    table: ScoreTable,
    touches: TouchList,
    heap: IndexedMinHeap<SlotIndex>,
    #[cfg(feature = "metrics")]
    metrics: LrfuMetrics,
}

impl LrfuPolicy {
    /// Creates a policy with decay rate `lambda`, clamped into `[0, 1]`.
    ///
    /// A NaN `lambda` is treated as `0`; use [`try_new`](Self::try_new) to
    /// reject it instead.
    ///
    /// ```
    /// use lrfukit::policy::lrfu::LrfuPolicy;
    ///
    /// assert_eq!(LrfuPolicy::new(-1.0).lambda(), 0.0);
    /// assert_eq!(LrfuPolicy::new(5.0).lambda(), 1.0);
    /// ```
    pub fn new(lambda: f64) -> Self {
        Self::with_config(LrfuConfig {
            lambda,
            ..LrfuConfig::default()
        })
    }

    /// Like [`new`](Self::new) but rejects a NaN `lambda`.
    pub fn try_new(lambda: f64) -> Result<Self, ConfigError> {
        let config = LrfuConfig {
            lambda,
            ..LrfuConfig::default()
        };
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Creates a policy from a full configuration. `lambda` is clamped.
    pub fn with_config(config: LrfuConfig) -> Self {
        let expected = config.expected_slots;
        Self {
            clock: ScoreClock::new(config.lambda),
            table: ScoreTable::with_capacity(expected),
            touches: TouchList::with_capacity(expected),
            heap: IndexedMinHeap::with_capacity(expected),
            #[cfg(feature = "metrics")]
            metrics: LrfuMetrics::default(),
        }
    }

    /// The clamped decay rate.
    pub fn lambda(&self) -> f64 {
        self.clock.lambda()
    }

    /// Current logical time.
    pub fn clock(&self) -> u64 {
        self.clock.now()
    }

    /// Number of tracked slots.
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// Number of entries in the score heap; equals [`len`](Self::len).
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.table.contains(slot)
    }

    /// Stored (undecayed) score of `slot`.
    pub fn score_of(&self, slot: SlotIndex) -> Option<f64> {
        self.table.get(slot).map(|record| record.score)
    }

    /// Stored score of `slot` decayed to the current tick.
    pub fn current_score(&self, slot: SlotIndex) -> Option<f64> {
        self.table.current_score(slot, &self.clock)
    }

    /// Tick at which `slot` was last inserted, refreshed or used.
    pub fn last_touched_at(&self, slot: SlotIndex) -> Option<u64> {
        self.table.get(slot).map(|record| record.last_touched_at)
    }

    /// The slot the next eviction would remove, with its stored score.
    pub fn peek_victim(&self) -> Option<(SlotIndex, f64)> {
        self.heap.peek_min()
    }

    /// Tracked slots ordered from least to most recently touched.
    pub fn touch_order(&self) -> Vec<SlotIndex> {
        self.touches.iter().collect()
    }

    /// Stops tracking every slot. The logical clock keeps its value.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.table.clear();
        self.touches.clear();
        self.heap.clear();
        debug!(clock = self.clock.now(), "lrfu: cleared");
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.table.len() * std::mem::size_of::<(SlotIndex, ScoreRecord)>()
            + self.touches.approx_bytes()
            + self.heap.approx_bytes()
    }

    /// Starts tracking `slot`.
    ///
    /// Inserting a slot that is already tracked is a caller bug; it is
    /// logged and handled by overwriting the slot's record in place so the
    /// structures stay mirrored.
    pub fn insert(&mut self, slot: SlotIndex) -> f64 {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let now = self.clock.tick();
        let score = self.clock.weight(now);
        if self.table.set(slot, score, now).is_some() {
            #[cfg(feature = "metrics")]
            self.metrics.record_reinsert();
            warn!(slot, "lrfu: insert of already tracked slot");
        }
        self.touches.append(slot);
        self.heap.push(slot, score);

        debug!(slot, score, clock = now, "lrfu: insert");
        score
    }

    /// Re-scores `slot` after its content was replaced. Returns the new
    /// score, or `None` if the slot is not tracked.
    pub fn refresh(&mut self, slot: SlotIndex) -> Option<f64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_refresh_call();
        let score = self.reference(slot, Reference::Refresh)?;
        #[cfg(feature = "metrics")]
        self.metrics.record_refresh_found();
        Some(score)
    }

    /// Re-scores `slot` after a cache hit. Returns the new score, or
    /// `None` if the slot is not tracked.
    pub fn touch(&mut self, slot: SlotIndex) -> Option<f64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_use_call();
        let score = self.reference(slot, Reference::Use)?;
        #[cfg(feature = "metrics")]
        self.metrics.record_use_found();
        Some(score)
    }

    /// Stops tracking `slot`. Returns `false` if it was not tracked.
    pub fn remove(&mut self, slot: SlotIndex) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_erase_call();

        let unlinked = self.touches.remove(slot);
        let record = self.table.remove(slot);
        let heap_score = self.heap.remove(slot);
        if !(unlinked || record.is_some() || heap_score.is_some()) {
            trace!(slot, "lrfu: erase of untracked slot");
            return false;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_erase_found();
        debug!(slot, score = record.map(|r| r.score), "lrfu: erase");
        true
    }

    /// Evicts lowest-score slots until the population fits `capacity`.
    ///
    /// `on_evict` is called once per victim after its bookkeeping is gone.
    /// Stops early, leaving the population over capacity, if the heap runs
    /// dry first; that only happens if the structures have diverged.
    pub fn evict_to<F>(&mut self, capacity: usize, mut on_evict: F) -> usize
    where
        F: FnMut(SlotIndex, f64),
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let mut evicted = 0usize;
        while self.touches.len() > capacity {
            let Some((slot, score)) = self.heap.pop_min() else {
                #[cfg(feature = "metrics")]
                self.metrics.record_evict_heap_exhausted();
                warn!(
                    population = self.touches.len(),
                    capacity, "lrfu: score heap empty, eviction stopped over capacity"
                );
                break;
            };
            self.touches.remove(slot);
            self.table.remove(slot);
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();

            on_evict(slot, score);
            debug!(slot, score, "lrfu: evicted");
            evicted += 1;
        }
        evicted
    }

    /// Verifies that the score table, touch list and score heap track the
    /// same slots, that heap scores mirror the table, and that every heap
    /// entry sits at its recorded position in heap order.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let tracked = self.touches.len();
        if self.table.len() != tracked || self.heap.len() != tracked {
            return Err(InvariantError::new(format!(
                "population mismatch: touch list {}, score table {}, heap {}",
                tracked,
                self.table.len(),
                self.heap.len()
            )));
        }

        let now = self.clock.now();
        for slot in self.touches.iter() {
            let record = self
                .table
                .get(slot)
                .ok_or_else(|| InvariantError::new(format!("slot {slot} missing from table")))?;
            let heap_score = self
                .heap
                .score_of(&slot)
                .ok_or_else(|| InvariantError::new(format!("slot {slot} missing from heap")))?;
            if heap_score.to_bits() != record.score.to_bits() {
                return Err(InvariantError::new(format!(
                    "slot {slot}: heap score {heap_score} != table score {}",
                    record.score
                )));
            }
            if record.last_touched_at > now {
                return Err(InvariantError::new(format!(
                    "slot {slot} touched at {} after clock {now}",
                    record.last_touched_at
                )));
            }
        }

        let scores: Vec<(SlotIndex, f64)> = self.heap.iter().collect();
        for (idx, (slot, score)) in scores.iter().enumerate() {
            if self.heap.position_of(slot) != Some(idx) {
                return Err(InvariantError::new(format!(
                    "slot {slot} recorded at {:?}, stored at {idx}",
                    self.heap.position_of(slot)
                )));
            }
            if idx > 0 && *score < scores[(idx - 1) / 2].1 {
                return Err(InvariantError::new(format!(
                    "heap order violated at index {idx} (slot {slot})"
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{err}");
        }
        self.touches.debug_validate_invariants();
        self.heap.debug_validate_invariants();
    }

    fn reference(&mut self, slot: SlotIndex, hook: Reference) -> Option<f64> {
        if !self.table.contains(slot) {
            trace!(slot, ?hook, "lrfu: reference to untracked slot");
            return None;
        }

        let now = self.clock.tick();
        let weight = self.clock.weight(0);
        #[allow(clippy::float_cmp)]
        let score = if weight == 1.0 {
            weight
        } else {
            weight + self.table.current_score(slot, &self.clock).unwrap_or(0.0)
        };
        self.table.set(slot, score, now);
        self.touches.touch(slot);
        self.heap.update(slot, score);

        debug!(slot, score, clock = now, ?hook, "lrfu: reference");
        Some(score)
    }
}

impl Default for LrfuPolicy {
    fn default() -> Self {
        Self::with_config(LrfuConfig::default())
    }
}

impl ReplacementPolicy for LrfuPolicy {
    fn on_insert<M: ?Sized>(&mut self, slot: SlotIndex, _payload: &[u8], _meta: &M) {
        self.insert(slot);
    }

    fn on_refresh<M: ?Sized>(&mut self, slot: SlotIndex, _payload: &[u8], _meta: &M) {
        self.refresh(slot);
    }

    fn on_use(&mut self, slot: SlotIndex, _payload: &[u8]) {
        self.touch(slot);
    }

    fn on_erase(&mut self, slot: SlotIndex, _payload: &[u8]) {
        self.remove(slot);
    }

    fn evict_entries<S: SlotStore + ?Sized>(&mut self, store: &mut S) -> usize {
        let capacity = store.configured_capacity();
        self.evict_to(capacity, |slot, _| store.erase_payload(slot))
    }
}

#[cfg(feature = "metrics")]
impl LrfuPolicy {
    /// Zeroes all counters.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    pub fn metrics_snapshot(&self) -> LrfuMetricsSnapshot {
        LrfuMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            reinserts: self.metrics.reinserts,
            refresh_calls: self.metrics.refresh_calls,
            refresh_found: self.metrics.refresh_found,
            use_calls: self.metrics.use_calls,
            use_found: self.metrics.use_found,
            erase_calls: self.metrics.erase_calls,
            erase_found: self.metrics.erase_found,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            evict_heap_exhausted: self.metrics.evict_heap_exhausted,
            clear_calls: self.metrics.clear_calls,
            tracked_len: self.len(),
            heap_len: self.heap.len(),
            clock: self.clock.now(),
            lambda: self.clock.lambda(),
        }
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<LrfuMetricsSnapshot> for LrfuPolicy {
    fn snapshot(&self) -> LrfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ==============================================
// LRFU POLICY TESTS
// ==============================================
