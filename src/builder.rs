//! Policy configuration and builder.
//!
//! Capacity is deliberately absent: the slot store owns it and the policy
//! reads it through [`SlotStore::configured_capacity`](crate::traits::SlotStore::configured_capacity)
//! on every eviction sweep.
//!
//! ## Example
//!
//! ```rust
//! use lrfukit::builder::LrfuBuilder;
//!
//! let policy = LrfuBuilder::new()
//!     .lambda(0.3)
//!     .expected_slots(1024)
//!     .build();
//! assert_eq!(policy.lambda(), 0.3);
//! assert!(policy.is_empty());
//! ```

use crate::error::ConfigError;
use crate::policy::lrfu::LrfuPolicy;

/// Decay rate used when none is given.
pub const DEFAULT_LAMBDA: f64 = 0.5;

/// Parameters for an [`LrfuPolicy`].
///
/// | Field            | Type    | Default | Description                              |
/// |------------------|---------|---------|------------------------------------------|
/// | `lambda`         | `f64`   | 0.5     | Decay rate, clamped into `[0, 1]`        |
/// | `expected_slots` | `usize` | 0       | Pre-sizes internal maps, list and heap   |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LrfuConfig {
    pub lambda: f64,
    pub expected_slots: usize,
}

impl LrfuConfig {
    /// Rejects parameters that have no sensible clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lambda.is_nan() {
            return Err(ConfigError::new("lambda must not be NaN"));
        }
        Ok(())
    }
}

impl Default for LrfuConfig {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
            expected_slots: 0,
        }
    }
}

/// Fluent builder for [`LrfuPolicy`].
#[derive(Debug, Clone, Default)]
pub struct LrfuBuilder {
    config: LrfuConfig,
}

impl LrfuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decay rate; near 1 favors recency, 0 favors frequency.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.config.lambda = lambda;
        self
    }

    /// Number of slots the store is expected to hold.
    pub fn expected_slots(mut self, slots: usize) -> Self {
        self.config.expected_slots = slots;
        self
    }

    pub fn config(&self) -> &LrfuConfig {
        &self.config
    }

    /// Builds the policy, clamping `lambda` (NaN becomes 0).
    pub fn build(self) -> LrfuPolicy {
        LrfuPolicy::with_config(self.config)
    }

    /// Builds the policy, rejecting a NaN `lambda`.
    pub fn try_build(self) -> Result<LrfuPolicy, ConfigError> {
        self.config.validate()?;
        Ok(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let builder = LrfuBuilder::new();
        assert_eq!(builder.config().lambda, DEFAULT_LAMBDA);
        assert_eq!(builder.config().expected_slots, 0);
        assert_eq!(builder.build().lambda(), DEFAULT_LAMBDA);
    }

    #[test]
    fn build_clamps_out_of_range_lambda() {
        assert_eq!(LrfuBuilder::new().lambda(-3.0).build().lambda(), 0.0);
        assert_eq!(LrfuBuilder::new().lambda(3.0).build().lambda(), 1.0);
        assert_eq!(LrfuBuilder::new().lambda(f64::NAN).build().lambda(), 0.0);
    }

    #[test]
    fn try_build_rejects_nan_only() {
        let err = LrfuBuilder::new().lambda(f64::NAN).try_build().unwrap_err();
        assert_eq!(err.message(), "lambda must not be NaN");
        assert!(LrfuBuilder::new().lambda(7.0).try_build().is_ok());
        assert!(LrfuBuilder::new().lambda(f64::NEG_INFINITY).try_build().is_ok());
    }

    #[test]
    fn expected_slots_is_carried() {
        let builder = LrfuBuilder::new().expected_slots(64);
        assert_eq!(builder.config().expected_slots, 64);
        assert!(builder.build().is_empty());
    }
}
