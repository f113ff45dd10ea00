//! Establishing a target from a baseline period via `statrs`.
//!
//! Mean and sample SD (n - 1) of the baseline runs of a new control lot.

use statrs::statistics::Statistics;

use labqc_core::constants::MIN_BASELINE_POINTS;
use labqc_core::errors::StatisticsError;
use labqc_core::{QcResult, TargetStatistics};

/// Compute target statistics from baseline values.
pub fn establish(values: &[f64]) -> Result<TargetStatistics, StatisticsError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(StatisticsError::NonFiniteValue { index });
    }
    if values.len() < MIN_BASELINE_POINTS {
        return Err(StatisticsError::InsufficientData {
            required: MIN_BASELINE_POINTS,
            actual: values.len(),
        });
    }

    let mean = values.iter().mean();
    let sd = values.iter().std_dev();
    TargetStatistics::try_new(mean, sd)
}

/// Compute target statistics from recorded baseline runs.
pub fn establish_from_results(results: &[QcResult]) -> Result<TargetStatistics, StatisticsError> {
    let values: Vec<f64> = results.iter().map(|r| r.value).collect();
    establish(&values)
}
