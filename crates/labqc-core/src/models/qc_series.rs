use serde::{Deserialize, Serialize};

use super::{QcResult, TargetStatistics};

/// The recorded runs of one (test, control lot) pair together with its target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QcSeries {
    pub test_id: String,
    pub control_id: String,
    pub target: TargetStatistics,
    pub results: Vec<QcResult>,
}

impl QcSeries {
    pub fn new(
        test_id: impl Into<String>,
        control_id: impl Into<String>,
        target: TargetStatistics,
        results: Vec<QcResult>,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            control_id: control_id.into(),
            target,
            results,
        }
    }

    /// Results that actually belong to this series.
    ///
    /// Providers may hand back mixed data; evaluating it as one series would
    /// produce meaningless violations.
    pub fn homogeneous_results(&self) -> Vec<QcResult> {
        self.results
            .iter()
            .filter(|r| r.belongs_to(&self.test_id, &self.control_id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
