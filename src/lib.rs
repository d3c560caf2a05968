//! lrfukit: LRFU scoring and eviction for slot-indexed content stores.
//!
//! A slot store calls the [`ReplacementPolicy`](traits::ReplacementPolicy)
//! hooks on [`LrfuPolicy`](policy::lrfu::LrfuPolicy) as entries are
//! admitted, refreshed, served and erased; when the store outgrows its
//! capacity, [`evict_entries`](traits::ReplacementPolicy::evict_entries)
//! removes the lowest-scoring slots and calls back into the store for each.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
