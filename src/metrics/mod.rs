//! Optional policy counters (feature `metrics`).
//!
//! Recording, snapshotting and export are split across small traits so the
//! policy only ever increments counters:
//!
//! - [`traits::LrfuMetricsRecorder`]: written by [`LrfuPolicy`](crate::policy::lrfu::LrfuPolicy)
//! - [`traits::MetricsSnapshotProvider`]: copy counters plus gauges out
//! - [`traits::MetricsExporter`]: publish a snapshot, e.g. as Prometheus text
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
