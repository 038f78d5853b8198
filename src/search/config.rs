//! Turn selector configuration parameters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

use super::policy::Score;

/// Turn selector configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Random seed for baseline scores.
    /// Same seed produces identical turn choices.
    pub seed: u64,

    /// Lowest baseline score for a safe, non-winning turn.
    pub baseline_min: i32,

    /// Highest baseline score for a safe, non-winning turn.
    pub baseline_max: i32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            baseline_min: 1,
            baseline_max: 100,
        }
    }
}

impl SelectorConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom baseline range.
    pub fn with_baseline(mut self, min: i32, max: i32) -> Self {
        self.baseline_min = min;
        self.baseline_max = max;
        self
    }

    #[must_use]
    pub fn baseline_range(&self) -> RangeInclusive<i32> {
        self.baseline_min..=self.baseline_max
    }

    /// The baseline range must be non-empty, positive, and strictly between
    /// the loss and win sentinels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_baseline(&self.baseline_range())
    }
}

/// Shared by `SelectorConfig::validate` and `SafetyScoring::new`.
pub(crate) fn check_baseline(range: &RangeInclusive<i32>) -> Result<(), ConfigError> {
    let (min, max) = (*range.start(), *range.end());
    if min > max {
        return Err(ConfigError::EmptyBaselineRange { min, max });
    }
    if min <= 0 || max >= Score::WIN.value() {
        return Err(ConfigError::BaselineOutOfBounds { min, max });
    }
    Ok(())
}
