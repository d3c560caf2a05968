//! Replacement policies.
//!
//! - [`lrfu`]: decayed recency/frequency scoring with heap-ordered eviction
pub mod lrfu;
