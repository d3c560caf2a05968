//! Workload generators and a minimal slot store for LRFU benchmarks.
//!
//! Key streams are seeded so every run replays the same accesses.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Zipf};
use rustc_hash::FxHashSet;

use lrfukit::traits::{ReplacementPolicy, SlotIndex, SlotStore};

#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Uniform random slots in `[0, universe)`.
    Uniform,
    /// Hot/cold split with a configurable hot fraction and hot access probability.
    Hotset { hot_fraction: f64, hot_prob: f64 },
    /// Sequential scan in `[0, universe)`.
    Scan,
    /// Zipfian distribution with exponent `s` (1.0 is the classic web skew).
    Zipfian { s: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpec {
    pub universe: u64,
    pub workload: Workload,
    pub seed: u64,
}

impl WorkloadSpec {
    pub fn generator(self) -> WorkloadGenerator {
        WorkloadGenerator::new(self.universe, self.workload, self.seed)
    }
}

#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    universe: u64,
    workload: Workload,
    rng: SmallRng,
    scan_pos: u64,
    zipf: Option<Zipf<f64>>,
}

impl WorkloadGenerator {
    pub fn new(universe: u64, workload: Workload, seed: u64) -> Self {
        let universe = universe.max(1);
        let zipf = match workload {
            Workload::Zipfian { s } => Zipf::new(universe as f64, s).ok(),
            _ => None,
        };
        Self {
            universe,
            workload,
            rng: SmallRng::seed_from_u64(seed),
            scan_pos: 0,
            zipf,
        }
    }

    pub fn next_slot(&mut self) -> SlotIndex {
        match self.workload {
            Workload::Uniform => self.rng.random_range(0..self.universe),
            Workload::Hotset {
                hot_fraction,
                hot_prob,
            } => {
                let hot_size = ((self.universe as f64) * hot_fraction.clamp(0.0, 1.0)).round() as u64;
                let hot_size = hot_size.clamp(1, self.universe);
                if self.rng.random::<f64>() < hot_prob.clamp(0.0, 1.0) || hot_size == self.universe {
                    self.rng.random_range(0..hot_size)
                } else {
                    self.rng.random_range(hot_size..self.universe)
                }
            },
            Workload::Scan => {
                let slot = self.scan_pos;
                self.scan_pos = (self.scan_pos + 1) % self.universe;
                slot
            },
            Workload::Zipfian { .. } => match &self.zipf {
                // Zipf samples ranks in [1, universe].
                Some(zipf) => (zipf.sample(&mut self.rng) as u64 - 1).min(self.universe - 1),
                None => self.rng.random_range(0..self.universe),
            },
        }
    }
}

/// Resident-set store: remembers which slots hold content, nothing else.
#[derive(Debug)]
pub struct BenchStore {
    capacity: usize,
    resident: FxHashSet<SlotIndex>,
    erased: u64,
}

impl BenchStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            resident: FxHashSet::with_capacity_and_hasher(capacity + 1, Default::default()),
            erased: 0,
        }
    }

    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.resident.contains(&slot)
    }

    pub fn admit(&mut self, slot: SlotIndex) {
        self.resident.insert(slot);
    }

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn erased(&self) -> u64 {
        self.erased
    }
}

impl SlotStore for BenchStore {
    fn configured_capacity(&self) -> usize {
        self.capacity
    }

    fn erase_payload(&mut self, slot: SlotIndex) {
        self.resident.remove(&slot);
        self.erased += 1;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HitRate {
    pub hits: u64,
    pub misses: u64,
}

impl HitRate {
    pub fn hit_rate(self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Drives `policy` the way a store would: a hit calls `on_use`, a miss
/// admits the slot, calls `on_insert` and then runs eviction.
pub fn run_hit_rate<P: ReplacementPolicy>(
    policy: &mut P,
    store: &mut BenchStore,
    generator: &mut WorkloadGenerator,
    operations: usize,
) -> HitRate {
    let mut hits = 0u64;
    let mut misses = 0u64;

    for _ in 0..operations {
        let slot = generator.next_slot();
        if store.contains(slot) {
            hits += 1;
            policy.on_use(slot, &[]);
        } else {
            misses += 1;
            store.admit(slot);
            policy.on_insert(slot, &[], &());
            policy.evict_entries(store);
        }
    }

    HitRate { hits, misses }
}
