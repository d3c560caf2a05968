/// Point-in-time copy of [`LrfuMetrics`](crate::metrics::metrics_impl::LrfuMetrics)
/// plus gauges read from the policy.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LrfuMetricsSnapshot {
    pub insert_calls: u64,
    pub reinserts: u64,
    pub refresh_calls: u64,
    pub refresh_found: u64,
    pub use_calls: u64,
    pub use_found: u64,
    pub erase_calls: u64,
    pub erase_found: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub evict_heap_exhausted: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub tracked_len: usize,
    pub heap_len: usize,
    pub clock: u64,
    pub lambda: f64,
}
