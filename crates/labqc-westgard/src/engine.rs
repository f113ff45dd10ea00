//! `WestgardEngine`: implements `IRuleEvaluator`, applies the configured rule
//! set, and packages violations with a Levey-Jennings chart and run status.

use serde::{Deserialize, Serialize};

use labqc_core::config::{ChartConfig, WestgardConfig};
use labqc_core::errors::LabQcResult;
use labqc_core::traits::{IResultsProvider, IRuleEvaluator};
use labqc_core::{LabQcConfig, QcResult, TargetStatistics, Violation};

use crate::evaluator;
use crate::levey_jennings::LeveyJenningsChart;
use crate::status::RunStatus;

/// Everything a dashboard needs for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    pub violations: Vec<Violation>,
    pub chart: LeveyJenningsChart,
    pub status: RunStatus,
}

impl SeriesReport {
    pub fn rejections(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_rejection())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_rejection())
    }
}

/// Configurable Westgard evaluation.
///
/// With the default config every rule is reported and output is identical
/// to [`evaluator::evaluate`].
#[derive(Debug, Clone, Default)]
pub struct WestgardEngine {
    config: WestgardConfig,
    chart: ChartConfig,
}

impl WestgardEngine {
    pub fn new(config: WestgardConfig) -> Self {
        Self {
            config,
            chart: ChartConfig::default(),
        }
    }

    pub fn from_config(config: &LabQcConfig) -> Self {
        Self {
            config: config.westgard.clone(),
            chart: config.chart.clone(),
        }
    }

    pub fn with_chart_config(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    pub fn config(&self) -> &WestgardConfig {
        &self.config
    }

    /// Evaluate a series, keeping only enabled rules.
    pub fn evaluate(&self, results: &[QcResult], target: &TargetStatistics) -> Vec<Violation> {
        let span = tracing::debug_span!(
            "westgard_evaluate",
            results = results.len(),
            violations = tracing::field::Empty,
        );
        let _enter = span.enter();

        let mut violations = evaluator::evaluate_target(results, target, self.config.sd_epsilon);
        violations.retain(|v| self.config.is_enabled(v.rule));

        span.record("violations", violations.len());
        violations
    }

    /// Evaluate and build the chart and run status.
    pub fn analyze(&self, results: &[QcResult], target: &TargetStatistics) -> SeriesReport {
        let violations = self.evaluate(results, target);
        let chart = LeveyJenningsChart::build_with(
            results,
            target,
            &violations,
            &self.chart,
            self.config.sd_epsilon,
        );
        let status = RunStatus::from_violations(&violations);
        SeriesReport {
            violations,
            chart,
            status,
        }
    }

    /// Fetch a series from a provider and analyze it.
    ///
    /// Results from other tests or lots are dropped before evaluation.
    pub fn analyze_series(
        &self,
        provider: &dyn IResultsProvider,
        test_id: &str,
        control_id: &str,
    ) -> LabQcResult<SeriesReport> {
        let series = provider.series(test_id, control_id)?;
        let results = series.homogeneous_results();
        if results.len() != series.len() {
            tracing::debug!(
                test_id,
                control_id,
                dropped = series.len() - results.len(),
                "provider returned results from other series"
            );
        }

        let report = self.analyze(&results, &series.target);
        match report.status {
            RunStatus::Rejected => tracing::warn!(
                test_id,
                control_id,
                violations = report.violations.len(),
                "QC run rejected"
            ),
            RunStatus::Warning => tracing::info!(test_id, control_id, "QC run has 1-2s warnings"),
            RunStatus::InControl => {}
        }
        Ok(report)
    }
}

impl IRuleEvaluator for WestgardEngine {
    fn evaluate(&self, results: &[QcResult], target: &TargetStatistics) -> Vec<Violation> {
        WestgardEngine::evaluate(self, results, target)
    }
}
