//! In-memory results provider.

use rustc_hash::FxHashMap;

use labqc_core::errors::ProviderError;
use labqc_core::traits::IResultsProvider;
use labqc_core::{QcResult, QcSeries, TargetStatistics};

/// Holds recorded runs and per-(test, control) targets in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResultsProvider {
    targets: FxHashMap<(String, String), TargetStatistics>,
    results: Vec<QcResult>,
}

impl InMemoryResultsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the target for a (test, control) pair.
    pub fn set_target(
        &mut self,
        test_id: impl Into<String>,
        control_id: impl Into<String>,
        target: TargetStatistics,
    ) {
        self.targets.insert((test_id.into(), control_id.into()), target);
    }

    pub fn record(&mut self, result: QcResult) {
        self.results.push(result);
    }

    pub fn record_all<I: IntoIterator<Item = QcResult>>(&mut self, results: I) {
        self.results.extend(results);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl IResultsProvider for InMemoryResultsProvider {
    fn series(&self, test_id: &str, control_id: &str) -> Result<QcSeries, ProviderError> {
        let target = self
            .targets
            .get(&(test_id.to_string(), control_id.to_string()))
            .copied()
            .ok_or_else(|| ProviderError::TargetNotFound {
                test_id: test_id.to_string(),
                control_id: control_id.to_string(),
            })?;

        let results = self
            .results
            .iter()
            .filter(|r| r.belongs_to(test_id, control_id))
            .cloned()
            .collect();

        Ok(QcSeries::new(test_id, control_id, target, results))
    }
}
