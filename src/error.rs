//! Error types for lrfukit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned by fallible constructors when a policy
//!   parameter cannot be used (e.g. a NaN decay rate).
//! - [`InvariantError`]: Returned by
//!   [`LrfuPolicy::check_invariants`](crate::policy::lrfu::LrfuPolicy::check_invariants)
//!   when the score table, touch list and score heap disagree.
//!
//! Lifecycle hooks never return errors; operations on untracked slots are
//! no-ops.
//!
//! ## Example Usage
//!
//! ```
//! use lrfukit::error::ConfigError;
//! use lrfukit::policy::lrfu::LrfuPolicy;
//!
//! // Out-of-range values are clamped, not rejected.
//! let policy: Result<LrfuPolicy, ConfigError> = LrfuPolicy::try_new(5.0);
//! assert_eq!(policy.unwrap().lambda(), 1.0);
//!
//! // NaN has no meaningful clamp and is rejected.
//! assert!(LrfuPolicy::try_new(f64::NAN).is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the policy's mirrored structures diverge.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when policy configuration parameters are invalid.
///
/// Produced by [`LrfuPolicy::try_new`](crate::policy::lrfu::LrfuPolicy::try_new)
/// and [`LrfuBuilder::try_build`](crate::builder::LrfuBuilder::try_build).
///
/// # Example
///
/// ```
/// use lrfukit::builder::LrfuBuilder;
///
/// let err = LrfuBuilder::new().lambda(f64::NAN).try_build().unwrap_err();
/// assert!(err.to_string().contains("lambda"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
