//! Six Sigma quality metric for a test: `(TEa - |bias|) / CV`, all in percent.

use std::fmt;

use serde::{Deserialize, Serialize};

use labqc_core::TargetStatistics;

/// Sigma performance bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigmaRating {
    Unacceptable,
    Poor,
    Marginal,
    Good,
    Excellent,
    WorldClass,
}

impl SigmaRating {
    pub fn from_sigma(sigma: f64) -> Self {
        if sigma >= 6.0 {
            Self::WorldClass
        } else if sigma >= 5.0 {
            Self::Excellent
        } else if sigma >= 4.0 {
            Self::Good
        } else if sigma >= 3.0 {
            Self::Marginal
        } else if sigma >= 2.0 {
            Self::Poor
        } else {
            Self::Unacceptable
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unacceptable => "unacceptable",
            Self::Poor => "poor",
            Self::Marginal => "marginal",
            Self::Good => "good",
            Self::Excellent => "excellent",
            Self::WorldClass => "world_class",
        }
    }
}

impl fmt::Display for SigmaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmaMetric {
    pub sigma: f64,
    pub tea_percent: f64,
    pub bias_percent: f64,
    pub cv_percent: f64,
}

impl SigmaMetric {
    /// `None` if CV is not positive or any input is non-finite.
    pub fn compute(tea_percent: f64, bias_percent: f64, cv_percent: f64) -> Option<Self> {
        if !tea_percent.is_finite() || !bias_percent.is_finite() || !cv_percent.is_finite() {
            return None;
        }
        if cv_percent <= 0.0 {
            return None;
        }
        Some(Self {
            sigma: (tea_percent - bias_percent.abs()) / cv_percent,
            tea_percent,
            bias_percent,
            cv_percent,
        })
    }

    /// Bias from the assigned target, CV from the observed imprecision.
    pub fn from_statistics(
        tea_percent: f64,
        target: &TargetStatistics,
        observed: &TargetStatistics,
    ) -> Option<Self> {
        let bias = bias_percent(observed.mean, target.mean)?;
        let cv = observed.cv_percent()?;
        Self::compute(tea_percent, bias, cv)
    }

    pub fn rating(&self) -> SigmaRating {
        SigmaRating::from_sigma(self.sigma)
    }
}

/// `(observed - target) / target * 100`. `None` for a zero target.
pub fn bias_percent(observed_mean: f64, target_mean: f64) -> Option<f64> {
    if target_mean == 0.0 || !target_mean.is_finite() || !observed_mean.is_finite() {
        return None;
    }
    Some((observed_mean - target_mean) / target_mean * 100.0)
}
