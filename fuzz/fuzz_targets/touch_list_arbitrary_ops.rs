#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use lrfukit::policy::lrfu::TouchList;

// Fuzz arbitrary append/touch/remove sequences on TouchList
//
// A VecDeque holds the expected oldest-to-newest order.
fuzz_target!(|data: &[u8]| {
    let mut list = TouchList::new();
    let mut model: VecDeque<u64> = VecDeque::new();

    for pair in data.chunks_exact(2) {
        let slot = u64::from(pair[1] % 24);
        match pair[0] % 4 {
            0 => {
                list.append(slot);
                model.retain(|&s| s != slot);
                model.push_back(slot);
            },
            1 => {
                let present = model.contains(&slot);
                assert_eq!(list.touch(slot), present);
                if present {
                    model.retain(|&s| s != slot);
                    model.push_back(slot);
                }
            },
            2 => {
                let present = model.contains(&slot);
                assert_eq!(list.remove(slot), present);
                model.retain(|&s| s != slot);
            },
            _ => {
                assert_eq!(list.oldest(), model.front().copied());
                assert_eq!(list.contains(slot), model.contains(&slot));
            },
        }

        assert_eq!(list.len(), model.len());
    }

    assert!(list.iter().eq(model.iter().copied()));
});
