use crate::models::{QcResult, TargetStatistics, Violation};

/// QC rule evaluation over one homogeneous series.
pub trait IRuleEvaluator: Send + Sync {
    /// Evaluate results against a target, returning deduplicated violations.
    /// Never fails: degenerate input yields an empty list.
    fn evaluate(&self, results: &[QcResult], target: &TargetStatistics) -> Vec<Violation>;
}
