use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::LrfuMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for policy metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_sample(&self, kind: &str, name: &str, value: impl std::fmt::Display) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_sample("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: impl std::fmt::Display) {
        self.write_sample("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<LrfuMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LrfuMetricsSnapshot) {
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("reinserts_total", snapshot.reinserts);
        self.write_counter("refresh_calls_total", snapshot.refresh_calls);
        self.write_counter("refresh_found_total", snapshot.refresh_found);
        self.write_counter("use_calls_total", snapshot.use_calls);
        self.write_counter("use_found_total", snapshot.use_found);
        self.write_counter("erase_calls_total", snapshot.erase_calls);
        self.write_counter("erase_found_total", snapshot.erase_found);
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter(
            "evict_heap_exhausted_total",
            snapshot.evict_heap_exhausted,
        );
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_gauge("tracked_len", snapshot.tracked_len);
        self.write_gauge("heap_len", snapshot.heap_len);
        self.write_gauge("clock", snapshot.clock);
        self.write_gauge("lambda", snapshot.lambda);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("lrfu", Vec::new());
        let snapshot = LrfuMetricsSnapshot {
            insert_calls: 3,
            evicted_entries: 1,
            tracked_len: 2,
            clock: 3,
            lambda: 0.5,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE lrfu_insert_calls_total counter\nlrfu_insert_calls_total 3\n"));
        assert!(text.contains("lrfu_evicted_entries_total 1\n"));
        assert!(text.contains("# TYPE lrfu_tracked_len gauge\nlrfu_tracked_len 2\n"));
        assert!(text.contains("lrfu_lambda 0.5\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&LrfuMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.starts_with("# TYPE insert_calls_total counter\ninsert_calls_total 0\n"));
    }
}
