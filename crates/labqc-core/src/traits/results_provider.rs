use crate::errors::ProviderError;
use crate::models::QcSeries;

/// Upstream source of recorded QC runs and their target statistics.
pub trait IResultsProvider: Send + Sync {
    /// Fetch the series for a (test, control lot) pair.
    fn series(&self, test_id: &str, control_id: &str) -> Result<QcSeries, ProviderError>;
}
