#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use lrfukit::ds::IndexedMinHeap;

// Fuzz arbitrary operation sequences on IndexedMinHeap
//
// Mirrors every call in a plain map and checks that the heap's minimum,
// per-key scores and length always agree with it.
fuzz_target!(|data: &[u8]| {
    let mut heap: IndexedMinHeap<u8> = IndexedMinHeap::new();
    let mut model: HashMap<u8, f64> = HashMap::new();

    for chunk in data.chunks_exact(3) {
        let op = chunk[0] % 6;
        let key = chunk[1] % 32;
        let score = f64::from(chunk[2]) / 255.0;

        match op {
            0 => {
                let old = heap.push(key, score);
                assert_eq!(old, model.insert(key, score));
            },
            1 => {
                let old = heap.update(key, score);
                match model.get_mut(&key) {
                    Some(slot) => {
                        assert_eq!(old, Some(*slot));
                        *slot = score;
                    },
                    None => assert_eq!(old, None),
                }
            },
            2 => {
                assert_eq!(heap.remove(key), model.remove(&key));
            },
            3 => {
                let popped = heap.pop_min();
                let min = model.values().copied().fold(f64::INFINITY, f64::min);
                match popped {
                    Some((k, s)) => {
                        assert_eq!(s, min);
                        assert_eq!(model.remove(&k), Some(s));
                    },
                    None => assert!(model.is_empty()),
                }
            },
            4 => {
                assert_eq!(heap.score_of(&key), model.get(&key).copied());
                assert_eq!(heap.contains(&key), model.contains_key(&key));
            },
            _ => {
                if key == 0 {
                    heap.clear();
                    model.clear();
                }
            },
        }

        assert_eq!(heap.len(), model.len());
        if let Some((_, s)) = heap.peek_min() {
            let min = model.values().copied().fold(f64::INFINITY, f64::min);
            assert_eq!(s, min);
        }
    }
});
