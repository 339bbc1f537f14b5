//! Configuration module for the benchmark harness.
//!
//! Everything here is built in code: there is no settings file and no
//! environment lookup. A run is fully described by two values:
//!
//! - `HarnessConfig`: failure policy, degenerate-timing floor, report locale
//! - `BaselineTable` (see [`baselines`]): the reference seconds per probe
//!
//! Both are handed to `Harness::new` and never mutated afterwards.

pub mod baselines;

pub use baselines::BaselineTable;

use crate::models::Locale;

/// Smallest elapsed time used for scoring by default (seconds).
pub const MIN_ELAPSED_SECONDS: f64 = 1e-6;

/// What the harness does when a probe returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the run at the first failing probe.
    #[default]
    Abort,
    /// Report the probe as failed (`score: N/A`) and move on.
    Continue,
}

/// Runtime options for a harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub failure_policy: FailurePolicy,
    /// Elapsed times below this are clamped before scoring; `None` scores raw
    pub elapsed_floor: Option<f64>,
    pub locale: Locale,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            failure_policy: FailurePolicy::Abort,
            elapsed_floor: Some(MIN_ELAPSED_SECONDS),
            locale: Locale::English,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the scoring floor. Non-positive or non-finite values disable it.
    #[must_use]
    pub fn with_elapsed_floor(mut self, floor: Option<f64>) -> Self {
        self.elapsed_floor = floor.filter(|f| f.is_finite() && *f > 0.0);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_faithful_abort() {
        let config = HarnessConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.elapsed_floor, Some(MIN_ELAPSED_SECONDS));
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn test_builders() {
        let config = HarnessConfig::new()
            .with_failure_policy(FailurePolicy::Continue)
            .with_locale(Locale::Chinese)
            .with_elapsed_floor(None);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.locale, Locale::Chinese);
        assert_eq!(config.elapsed_floor, None);
    }

    #[test]
    fn test_invalid_floor_disables_clamping() {
        assert_eq!(HarnessConfig::new().with_elapsed_floor(Some(0.0)).elapsed_floor, None);
        assert_eq!(HarnessConfig::new().with_elapsed_floor(Some(-1.0)).elapsed_floor, None);
        assert_eq!(HarnessConfig::new().with_elapsed_floor(Some(f64::NAN)).elapsed_floor, None);
        assert_eq!(HarnessConfig::new().with_elapsed_floor(Some(1e-3)).elapsed_floor, Some(1e-3));
    }
}
