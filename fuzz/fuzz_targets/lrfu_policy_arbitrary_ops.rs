#![no_main]

use libfuzzer_sys::fuzz_target;
use lrfukit::policy::lrfu::LrfuPolicy;
use lrfukit::traits::{ReplacementPolicy, SlotIndex, SlotStore};

struct FuzzStore {
    capacity: usize,
    erased: Vec<SlotIndex>,
}

impl SlotStore for FuzzStore {
    fn configured_capacity(&self) -> usize {
        self.capacity
    }

    fn erase_payload(&mut self, slot: SlotIndex) {
        self.erased.push(slot);
    }
}

// Fuzz arbitrary hook sequences on LrfuPolicy
//
// The first byte picks lambda (including out-of-range values), the rest
// drive insert/refresh/use/erase/evict. After every step the score table,
// touch list and heap must still agree, and each sweep must bring the
// population down to capacity.
fuzz_target!(|data: &[u8]| {
    let Some((&seed, ops)) = data.split_first() else {
        return;
    };
    let lambda = f64::from(seed) / 100.0 - 0.5;
    let mut policy = LrfuPolicy::new(lambda);
    assert!((0.0..=1.0).contains(&policy.lambda()));

    for pair in ops.chunks_exact(2) {
        let slot = SlotIndex::from(pair[1] % 48);
        let clock = policy.clock();
        let tracked = policy.contains(slot);

        match pair[0] % 6 {
            0 => {
                if !tracked {
                    policy.on_insert(slot, &[], &());
                    assert_eq!(policy.clock(), clock + 1);
                    assert_eq!(policy.last_touched_at(slot), Some(clock + 1));
                }
            },
            1 => {
                policy.on_refresh(slot, &[], &());
                let expected = if tracked { clock + 1 } else { clock };
                assert_eq!(policy.clock(), expected);
            },
            2 => {
                policy.on_use(slot, &[]);
                if tracked {
                    assert_eq!(policy.score_of(slot), Some(1.0));
                } else {
                    assert_eq!(policy.clock(), clock);
                }
            },
            3 => {
                policy.on_erase(slot, &[]);
                assert!(!policy.contains(slot));
                assert_eq!(policy.clock(), clock);
            },
            4 => {
                let capacity = usize::from(pair[1] % 32);
                let mut store = FuzzStore {
                    capacity,
                    erased: Vec::new(),
                };
                let before = policy.len();
                let floor = policy.peek_victim().map(|(_, score)| score);
                let evicted = policy.evict_entries(&mut store);
                assert_eq!(evicted, store.erased.len());
                assert_eq!(evicted, before.saturating_sub(capacity));
                assert!(policy.len() <= capacity);
                if let (Some(floor), Some((_, next))) = (floor, policy.peek_victim()) {
                    assert!(next >= floor);
                }
                for victim in store.erased {
                    assert!(!policy.contains(victim));
                }
            },
            _ => {
                if pair[1] == 0 {
                    policy.clear();
                    assert!(policy.is_empty());
                    assert_eq!(policy.clock(), clock);
                }
            },
        }

        assert_eq!(policy.len(), policy.heap_len());
        if let Err(err) = policy.check_invariants() {
            panic!("{err}");
        }
    }
});
