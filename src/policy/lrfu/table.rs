//! Per-slot score records.

use rustc_hash::FxHashMap;

use super::clock::ScoreClock;
use crate::traits::SlotIndex;

/// Stored score of one slot and the tick it was last touched at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub score: f64,
    pub last_touched_at: u64,
}

/// Score records keyed by slot.
#[derive(Debug, Default)]
pub struct ScoreTable {
    records: FxHashMap<SlotIndex, ScoreRecord>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.records.contains_key(&slot)
    }

    pub fn get(&self, slot: SlotIndex) -> Option<&ScoreRecord> {
        self.records.get(&slot)
    }

    /// Stores `score` for `slot` as of tick `at`, returning the previous record.
    pub fn set(&mut self, slot: SlotIndex, score: f64, at: u64) -> Option<ScoreRecord> {
        self.records.insert(
            slot,
            ScoreRecord {
                score,
                last_touched_at: at,
            },
        )
    }

    pub fn remove(&mut self, slot: SlotIndex) -> Option<ScoreRecord> {
        self.records.remove(&slot)
    }

    /// The stored score decayed to the clock's current tick. Read-only.
    pub fn current_score(&self, slot: SlotIndex, clock: &ScoreClock) -> Option<f64> {
        self.records
            .get(&slot)
            .map(|record| clock.decayed(record.score, record.last_touched_at))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &ScoreRecord)> {
        self.records.iter().map(|(slot, record)| (*slot, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut table = ScoreTable::with_capacity(4);
        assert_eq!(table.set(1, 0.5, 3), None);
        assert_eq!(
            table.get(1),
            Some(&ScoreRecord {
                score: 0.5,
                last_touched_at: 3
            })
        );
        let previous = table.set(1, 1.0, 4).unwrap();
        assert_eq!(previous.score, 0.5);
        assert_eq!(table.len(), 1);

        assert!(table.remove(1).is_some());
        assert!(table.remove(1).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn current_score_does_not_mutate() {
        let mut clock = ScoreClock::new(1.0);
        let mut table = ScoreTable::new();
        let at = clock.tick();
        table.set(7, 2.0, at);
        clock.tick();
        clock.tick();

        assert_eq!(table.current_score(7, &clock), Some(0.5));
        assert_eq!(table.get(7).map(|r| r.score), Some(2.0));
        assert_eq!(table.current_score(8, &clock), None);
    }
}
