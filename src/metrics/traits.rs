//! # Metrics Trait Hierarchy
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │     LrfuMetricsRecorder      │   written from policy hooks
//!   │  insert/refresh/use/erase    │
//!   │  evict/stall/clear           │
//!   └──────────────┬───────────────┘
//!                  │ snapshot()
//!                  ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │───►│ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Recorders only write counters; providers only read; exporters only publish.

/// Counters for the LRFU hook contract.
pub trait LrfuMetricsRecorder {
    fn record_insert_call(&mut self);
    /// `on_insert` hit a slot that was already tracked.
    fn record_reinsert(&mut self);
    fn record_refresh_call(&mut self);
    fn record_refresh_found(&mut self);
    fn record_use_call(&mut self);
    fn record_use_found(&mut self);
    fn record_erase_call(&mut self);
    fn record_erase_found(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    /// Eviction stopped with population over capacity and an empty heap.
    fn record_evict_heap_exhausted(&mut self);
    fn record_clear(&mut self);
}

/// Copy a point-in-time view of counters and gauges.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
