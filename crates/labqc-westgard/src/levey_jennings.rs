//! Levey-Jennings chart model.
//!
//! Turns a series, its target, and the evaluator's violations into
//! something a renderer can draw directly: control lines at the mean and
//! ±k SD, and one point per result with its zone, rules, and status.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use labqc_core::config::defaults::{DEFAULT_SD_EPSILON, MAX_CHART_SD_LINES};
use labqc_core::config::ChartConfig;
use labqc_core::{QcResult, TargetStatistics, Violation, WestgardRule};

use crate::status::RunStatus;

/// Band a point falls in, by |z|. Boundaries belong to the inner band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "within_1sd")]
    Within1Sd,
    #[serde(rename = "within_2sd")]
    Within2Sd,
    #[serde(rename = "within_3sd")]
    Within3Sd,
    #[serde(rename = "beyond_3sd")]
    Beyond3Sd,
}

impl Zone {
    pub fn from_z(z: f64) -> Self {
        let a = z.abs();
        if a <= 1.0 {
            Self::Within1Sd
        } else if a <= 2.0 {
            Self::Within2Sd
        } else if a <= 3.0 {
            Self::Within3Sd
        } else {
            Self::Beyond3Sd
        }
    }
}

/// A horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLine {
    /// "mean", "+2SD", "-1SD", ...
    pub label: String,
    /// Signed SD multiple; 0 for the mean.
    pub sd_multiple: i8,
    pub value: f64,
}

/// One plotted result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Position on the x axis (chronological, 0-based).
    pub index: usize,
    pub result_id: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// `None` when the target is degenerate.
    pub z_score: Option<f64>,
    pub zone: Option<Zone>,
    /// Rules that fired on this point, in emission order.
    pub rules: Vec<WestgardRule>,
    pub status: RunStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveyJenningsChart {
    pub target: TargetStatistics,
    pub lines: Vec<ControlLine>,
    pub points: Vec<ChartPoint>,
    pub status: RunStatus,
}

impl LeveyJenningsChart {
    /// Build with the default chart configuration (±3 SD lines).
    pub fn build(results: &[QcResult], target: &TargetStatistics, violations: &[Violation]) -> Self {
        Self::build_with(
            results,
            target,
            violations,
            &ChartConfig::default(),
            DEFAULT_SD_EPSILON,
        )
    }

    pub fn build_with(
        results: &[QcResult],
        target: &TargetStatistics,
        violations: &[Violation],
        config: &ChartConfig,
        sd_epsilon: f64,
    ) -> Self {
        let degenerate = target.is_degenerate(sd_epsilon);

        let mut by_result: FxHashMap<&str, Vec<WestgardRule>> = FxHashMap::default();
        for v in violations {
            by_result.entry(v.result_id.as_str()).or_default().push(v.rule);
        }

        let mut ordered: Vec<&QcResult> = results.iter().collect();
        ordered.sort_by_key(|r| r.timestamp);

        let points = ordered
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                let z_score = (!degenerate).then(|| target.z_score(r.value));
                let rules = by_result.get(r.id.as_str()).cloned().unwrap_or_default();
                ChartPoint {
                    index,
                    result_id: r.id.clone(),
                    timestamp: r.timestamp,
                    value: r.value,
                    z_score,
                    zone: z_score.filter(|z| !z.is_nan()).map(Zone::from_z),
                    status: RunStatus::from_rules(rules.iter().copied()),
                    rules,
                }
            })
            .collect();

        Self {
            target: *target,
            lines: control_lines(target, if degenerate { 0 } else { config.sd_lines }),
            points,
            status: RunStatus::from_violations(violations),
        }
    }

    /// Vertical extent covering every line and point, for axis scaling.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .map(|l| l.value)
            .chain(self.points.iter().map(|p| p.value))
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Points with at least one violation.
    pub fn flagged_points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.iter().filter(|p| !p.rules.is_empty())
    }
}

/// Lines from -k SD to +k SD, ascending, with `k` capped at
/// `MAX_CHART_SD_LINES`.
fn control_lines(target: &TargetStatistics, sd_lines: u8) -> Vec<ControlLine> {
    let k = sd_lines.min(MAX_CHART_SD_LINES) as i8;
    (-k..=k)
        .map(|m| ControlLine {
            label: match m {
                0 => "mean".to_string(),
                m if m > 0 => format!("+{m}SD"),
                m => format!("{m}SD"),
            },
            sd_multiple: m,
            value: target.limit(m as f64),
        })
        .collect()
}
