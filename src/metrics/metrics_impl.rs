use crate::metrics::traits::LrfuMetricsRecorder;

/// Counters owned by an [`LrfuPolicy`](crate::policy::lrfu::LrfuPolicy).
#[derive(Debug, Default, Clone)]
pub struct LrfuMetrics {
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
}

impl LrfuMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl LrfuMetricsRecorder for LrfuMetrics {
    #[inline]
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    #[inline]
    fn record_reinsert(&mut self) {
        self.reinserts += 1;
    }

    #[inline]
    fn record_refresh_call(&mut self) {
        self.refresh_calls += 1;
    }

    #[inline]
    fn record_refresh_found(&mut self) {
        self.refresh_found += 1;
    }

    #[inline]
    fn record_use_call(&mut self) {
        self.use_calls += 1;
    }

    #[inline]
    fn record_use_found(&mut self) {
        self.use_found += 1;
    }

    #[inline]
    fn record_erase_call(&mut self) {
        self.erase_calls += 1;
    }

    #[inline]
    fn record_erase_found(&mut self) {
        self.erase_found += 1;
    }

    #[inline]
    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    #[inline]
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    fn record_evict_heap_exhausted(&mut self) {
        self.evict_heap_exhausted += 1;
    }

    #[inline]
    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_increments_and_reset_zeroes() {
        let mut metrics = LrfuMetrics::new();
        metrics.record_insert_call();
        metrics.record_insert_call();
        metrics.record_use_call();
        metrics.record_evicted_entry();
        assert_eq!(metrics.insert_calls, 2);
        assert_eq!(metrics.use_calls, 1);
        assert_eq!(metrics.evicted_entries, 1);

        metrics.reset();
        assert_eq!(metrics.insert_calls, 0);
        assert_eq!(metrics.evicted_entries, 0);
    }
}
