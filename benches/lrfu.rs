mod common;

use std::hint::black_box;

use common::workload::{BenchStore, Workload, WorkloadSpec, run_hit_rate};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lrfukit::ds::IndexedMinHeap;
use lrfukit::policy::lrfu::LrfuPolicy;
use lrfukit::traits::ReplacementPolicy;

const CAPACITY: usize = 4096;

fn filled_policy(lambda: f64, slots: u64) -> LrfuPolicy {
    let mut policy = LrfuPolicy::new(lambda);
    for slot in 0..slots {
        policy.on_insert(slot, &[], &());
    }
    policy
}

fn bench_insert_evict_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("lrfu_hooks");
    group.throughput(Throughput::Elements(CAPACITY as u64));
    group.bench_function("insert_evict", |b| {
        b.iter_batched(
            || (filled_policy(0.5, CAPACITY as u64), BenchStore::new(CAPACITY)),
            |(mut policy, mut store)| {
                for slot in 0..CAPACITY as u64 {
                    policy.on_insert(black_box(slot + 1_000_000), &[], &());
                    black_box(policy.evict_entries(&mut store));
                }
                store
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_use_hotset(c: &mut Criterion) {
    let mut group = c.benchmark_group("lrfu_hooks");
    group.throughput(Throughput::Elements(CAPACITY as u64));
    group.bench_function("use_all", |b| {
        b.iter_batched(
            || filled_policy(0.5, CAPACITY as u64),
            |mut policy| {
                for slot in 0..CAPACITY as u64 {
                    policy.on_use(black_box(slot), &[]);
                }
                policy
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("erase_all", |b| {
        b.iter_batched(
            || filled_policy(0.5, CAPACITY as u64),
            |mut policy| {
                for slot in 0..CAPACITY as u64 {
                    policy.on_erase(black_box(slot), &[]);
                }
                policy
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_eviction_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("lrfu_eviction");
    for shrink_to in [CAPACITY / 2, CAPACITY / 8, 0] {
        let evicted = (CAPACITY - shrink_to) as u64;
        group.throughput(Throughput::Elements(evicted));
        group.bench_with_input(
            BenchmarkId::new("sweep_to", shrink_to),
            &shrink_to,
            |b, &shrink_to| {
                b.iter_batched(
                    || (filled_policy(0.5, CAPACITY as u64), BenchStore::new(shrink_to)),
                    |(mut policy, mut store)| black_box(policy.evict_entries(&mut store)),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_indexed_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");
    group.throughput(Throughput::Elements(CAPACITY as u64));
    group.bench_function("push_update_pop", |b| {
        b.iter(|| {
            let mut heap = IndexedMinHeap::with_capacity(CAPACITY);
            for key in 0..CAPACITY as u64 {
                heap.push(key, (key % 97) as f64);
            }
            for key in (0..CAPACITY as u64).step_by(3) {
                heap.update(key, 1.0);
            }
            while let Some(entry) = heap.pop_min() {
                black_box(entry);
            }
        })
    });
    group.finish();
}

fn bench_hit_rate_by_lambda(c: &mut Criterion) {
    let workloads = [
        ("uniform", Workload::Uniform),
        (
            "hotset_90_10",
            Workload::Hotset {
                hot_fraction: 0.1,
                hot_prob: 0.9,
            },
        ),
        ("scan", Workload::Scan),
        ("zipfian_1.0", Workload::Zipfian { s: 1.0 }),
    ];
    let operations = 20_000usize;

    let mut group = c.benchmark_group("lrfu_workloads");
    group.throughput(Throughput::Elements(operations as u64));
    for (name, workload) in workloads {
        for lambda in [0.0, 0.1, 0.5, 1.0] {
            let spec = WorkloadSpec {
                universe: (CAPACITY * 4) as u64,
                workload,
                seed: 42,
            };

            let mut policy = LrfuPolicy::new(lambda);
            let mut store = BenchStore::new(CAPACITY / 4);
            let stats = run_hit_rate(&mut policy, &mut store, &mut spec.generator(), operations);
            println!(
                "{name} lambda={lambda}: hit rate {:.2}% (evictions {})",
                stats.hit_rate() * 100.0,
                store.erased()
            );

            group.bench_with_input(
                BenchmarkId::new(name, lambda),
                &lambda,
                |b, &lambda| {
                    b.iter(|| {
                        let mut policy = LrfuPolicy::new(lambda);
                        let mut store = BenchStore::new(CAPACITY / 4);
                        black_box(run_hit_rate(
                            &mut policy,
                            &mut store,
                            &mut spec.generator(),
                            operations,
                        ))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_evict_steady_state,
    bench_use_hotset,
    bench_eviction_sweep,
    bench_indexed_heap,
    bench_hit_rate_by_lambda
);
criterion_main!(benches);
