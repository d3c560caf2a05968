//! Indexed binary min-heap with in-place score updates.
//!
//! Unlike [`std::collections::BinaryHeap`], every entry's array position is
//! tracked in a side map, so a key's score can be changed or the key removed
//! from the middle of the heap in O(log n) without scanning and without
//! leaving stale entries behind.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                       IndexedMinHeap Layout                           │
//! │                                                                       │
//! │   nodes: Vec<HeapNode<K, S>>     (implicit binary tree, min at 0)     │
//! │                                                                       │
//! │     idx:    0          1          2          3                        │
//! │           ┌──────────┬──────────┬──────────┬──────────┐               │
//! │           │ (7, 0.12)│ (3, 0.50)│ (9, 0.25)│ (4, 1.00)│               │
//! │           └──────────┴──────────┴──────────┴──────────┘               │
//! │                                                                       │
//! │                        (7, 0.12)                                      │
//! │                       /         \                                     │
//! │                (3, 0.50)     (9, 0.25)                                │
//! │                  /                                                    │
//! │            (4, 1.00)                                                  │
//! │                                                                       │
//! │   positions: FxHashMap<K, usize>   (key → current index in nodes)    │
//! │                                                                       │
//! │     { 7 → 0, 3 → 1, 9 → 2, 4 → 3 }                                    │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every swap rewrites both affected `positions` entries, so after any
//! public call `nodes[positions[k]].key == k` holds for all keys.
//!
//! ## Operations
//!
//! | Operation   | Description                                  | Complexity |
//! |-------------|----------------------------------------------|------------|
//! | `push`      | Insert key, or update it if already present  | O(log n)   |
//! | `update`    | Change an existing key's score, then fix     | O(log n)   |
//! | `remove`    | Remove a key from any position               | O(log n)   |
//! | `pop_min`   | Remove and return the smallest score         | O(log n)   |
//! | `peek_min`  | Smallest score without removal               | O(1)       |
//! | `score_of`  | Current score of a key                       | O(1)       |
//!
//! ## Example Usage
//!
//! ```
//! use lrfukit::ds::IndexedMinHeap;
//!
//! let mut heap: IndexedMinHeap<u64> = IndexedMinHeap::new();
//! heap.push(1, 0.5);
//! heap.push(2, 0.25);
//! heap.push(3, 0.75);
//!
//! // Raise slot 2 above everything else; slot 1 becomes the minimum.
//! heap.update(2, 1.0);
//! assert_eq!(heap.peek_min(), Some((1, 0.5)));
//!
//! heap.remove(1);
//! assert_eq!(heap.pop_min(), Some((3, 0.75)));
//! assert_eq!(heap.pop_min(), Some((2, 1.0)));
//! assert_eq!(heap.pop_min(), None);
//! ```
//!
//! ## Ordering
//!
//! Scores are compared with `PartialOrd`; equal scores have no defined
//! order. Callers must not store NaN.
//!
//! ## Thread Safety
//!
//! `IndexedMinHeap` is not thread-safe. Wrap in a mutex for concurrent access.
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
struct HeapNode<K, S> {
    key: K,
    score: S,
}

/// Binary min-heap keyed by `K` with position tracking for O(log n)
/// update and arbitrary removal.
///
/// # Type Parameters
///
/// - `K`: Key type (`Copy + Eq + Hash`), e.g. a slot index
/// - `S`: Score type (`PartialOrd + Copy`), `f64` by default
#[derive(Debug)]
pub struct IndexedMinHeap<K, S = f64> {
    nodes: Vec<HeapNode<K, S>>,
    positions: FxHashMap<K, usize>,
}

impl<K, S> IndexedMinHeap<K, S>
where
    K: Copy + Eq + Hash,
    S: PartialOrd + Copy,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the stored score for `key`.
    pub fn score_of(&self, key: &K) -> Option<S> {
        self.positions.get(key).map(|&pos| self.nodes[pos].score)
    }

    /// Returns the current array index of `key`.
    ///
    /// ```
    /// use lrfukit::ds::IndexedMinHeap;
    ///
    /// let mut heap: IndexedMinHeap<u64> = IndexedMinHeap::new();
    /// heap.push(10, 2.0);
    /// heap.push(11, 1.0);
    /// assert_eq!(heap.position_of(&11), Some(0));
    /// assert_eq!(heap.position_of(&10), Some(1));
    /// assert_eq!(heap.position_of(&12), None);
    /// ```
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns the minimum `(key, score)` without removing it.
    pub fn peek_min(&self) -> Option<(K, S)> {
        self.nodes.first().map(|node| (node.key, node.score))
    }

    /// Inserts `key` with `score`.
    ///
    /// If `key` is already present its score is replaced in place and the
    /// previous score is returned; the heap never holds two entries for one key.
    pub fn push(&mut self, key: K, score: S) -> Option<S> {
        if self.positions.contains_key(&key) {
            return self.update(key, score);
        }
        let pos = self.nodes.len();
        self.nodes.push(HeapNode { key, score });
        self.positions.insert(key, pos);
        self.sift_up(pos);
        None
    }

    /// Replaces the score of an existing key and restores heap order from
    /// that key's position. Returns the previous score, or `None` (and does
    /// nothing) if `key` is absent.
    pub fn update(&mut self, key: K, score: S) -> Option<S> {
        let pos = *self.positions.get(&key)?;
        let previous = std::mem::replace(&mut self.nodes[pos].score, score);
        self.fix(pos);
        Some(previous)
    }

    /// Removes `key` from wherever it sits in the heap.
    pub fn remove(&mut self, key: K) -> Option<S> {
        let pos = *self.positions.get(&key)?;
        self.remove_at(pos).map(|(_, score)| score)
    }

    /// Removes and returns the minimum `(key, score)`.
    pub fn pop_min(&mut self) -> Option<(K, S)> {
        if self.nodes.is_empty() {
            return None;
        }
        self.remove_at(0)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.positions.clear();
    }

    /// Iterates `(key, score)` pairs in array order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = (K, S)> + '_ {
        self.nodes.iter().map(|node| (node.key, node.score))
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.nodes.capacity() * std::mem::size_of::<HeapNode<K, S>>()
            + self.positions.capacity() * std::mem::size_of::<(K, usize)>()
    }

    fn remove_at(&mut self, pos: usize) -> Option<(K, S)> {
        let last = self.nodes.len().checked_sub(1)?;
        if pos != last {
            self.swap(pos, last);
        }
        let node = self.nodes.pop()?;
        self.positions.remove(&node.key);
        if pos < self.nodes.len() {
            self.fix(pos);
        }
        Some((node.key, node.score))
    }

    /// Restores order for the node at `pos` after its score changed.
    fn fix(&mut self, pos: usize) {
        if !self.sift_down(pos) {
            self.sift_up(pos);
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.nodes[i].score < self.nodes[j].score
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
        self.positions.insert(self.nodes[i].key, i);
        self.positions.insert(self.nodes[j].key, j);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    /// Returns `true` if the node moved.
    fn sift_down(&mut self, start: usize) -> bool {
        let len = self.nodes.len();
        let mut pos = start;
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
        pos > start
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates heap order and position bookkeeping (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.nodes.len(), self.positions.len());
        for (idx, node) in self.nodes.iter().enumerate() {
            assert_eq!(self.positions.get(&node.key), Some(&idx));
            if idx > 0 {
                let parent = (idx - 1) / 2;
                assert!(
                    !(node.score < self.nodes[parent].score),
                    "heap order violated at index {idx}"
                );
            }
        }
    }
}

impl<K, S> Default for IndexedMinHeap<K, S>
where
    K: Copy + Eq + Hash,
    S: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
