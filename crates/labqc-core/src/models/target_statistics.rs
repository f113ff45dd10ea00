use serde::{Deserialize, Serialize};

use crate::errors::StatisticsError;

/// Reference distribution (target mean and SD) for a (test, control lot) pair.
///
/// `new` accepts anything so that the evaluator can degrade gracefully;
/// use `try_new` at setup time to reject nonsense targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetStatistics {
    pub mean: f64,
    pub sd: f64,
}

impl TargetStatistics {
    pub fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// Validated constructor: finite mean, finite non-negative SD.
    pub fn try_new(mean: f64, sd: f64) -> Result<Self, StatisticsError> {
        if !mean.is_finite() {
            return Err(StatisticsError::NonFiniteParameter { name: "mean" });
        }
        if !sd.is_finite() {
            return Err(StatisticsError::NonFiniteParameter { name: "sd" });
        }
        if sd < 0.0 {
            return Err(StatisticsError::NegativeStandardDeviation { sd });
        }
        Ok(Self { mean, sd })
    }

    /// True when no meaningful z-score exists: SD at or below `epsilon`,
    /// negative, or either parameter non-finite.
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        !self.mean.is_finite() || !self.sd.is_finite() || self.sd <= epsilon.max(0.0)
    }

    /// `(value - mean) / sd`. Callers check `is_degenerate` first.
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.sd
    }

    /// z-score, or `None` when the target is degenerate.
    pub fn checked_z_score(&self, value: f64, epsilon: f64) -> Option<f64> {
        if self.is_degenerate(epsilon) {
            None
        } else {
            Some(self.z_score(value))
        }
    }

    /// Control limit at `k` standard deviations: `mean + k * sd`.
    pub fn limit(&self, k: f64) -> f64 {
        self.mean + k * self.sd
    }

    /// Coefficient of variation in percent. `None` when the mean is zero.
    pub fn cv_percent(&self) -> Option<f64> {
        if self.mean == 0.0 || !self.mean.is_finite() || !self.sd.is_finite() {
            return None;
        }
        Some(self.sd / self.mean.abs() * 100.0)
    }
}
