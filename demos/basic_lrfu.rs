use std::collections::HashMap;

use lrfukit::builder::LrfuBuilder;
use lrfukit::traits::{ReplacementPolicy, SlotIndex, SlotStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

struct Store {
    capacity: usize,
    payloads: HashMap<SlotIndex, &'static str>,
}

impl SlotStore for Store {
    fn configured_capacity(&self) -> usize {
        self.capacity
    }

    fn erase_payload(&mut self, slot: SlotIndex) {
        if let Some(payload) = self.payloads.remove(&slot) {
            println!("evicted slot {slot} ({payload})");
        }
    }
}

fn main() {
    // RUST_LOG=lrfukit=debug shows every hook.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time())
        .init();

    let mut policy = LrfuBuilder::new().lambda(0.5).expected_slots(2).build();
    let mut store = Store {
        capacity: 2,
        payloads: HashMap::new(),
    };

    for (slot, payload) in [(1, "alpha"), (2, "beta")] {
        store.payloads.insert(slot, payload);
        policy.on_insert(slot, payload.as_bytes(), &());
        policy.evict_entries(&mut store);
    }

    policy.on_use(1, b"alpha");

    store.payloads.insert(3, "gamma");
    policy.on_insert(3, b"gamma", &());
    policy.evict_entries(&mut store);

    for slot in [1, 2, 3] {
        println!(
            "slot {slot}: resident={} score={:?}",
            store.payloads.contains_key(&slot),
            policy.score_of(slot)
        );
    }
}

// Expected output:
// evicted slot 3 (gamma)
// slot 1: resident=true score=Some(1.0)
// slot 2: resident=true score=Some(0.5)
// slot 3: resident=false score=None
//
// Explanation: capacity=2; slot 1 was used so it scores 1.0, and a newly
// inserted slot scores weight(clock), which falls as the clock advances, so
// the newest insert (slot 3, score 0.5^2 = 0.25) is the lowest and goes first.
