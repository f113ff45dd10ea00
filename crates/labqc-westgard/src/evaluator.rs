//! The Westgard multi-rule evaluator.
//!
//! Pure and stateless: sorts the results chronologically, scores each one
//! against the target, runs every rule at every point, then deduplicates.

use labqc_core::config::defaults::DEFAULT_SD_EPSILON;
use labqc_core::{QcResult, TargetStatistics, Violation, WestgardRule};

use crate::dedup::dedup_violations;
use crate::rules::{self, RuleInput, ScoredPoint};

/// Evaluate `results` against a target `mean` and `sd`.
///
/// Returns one violation per triggered (result, rule) pair, in chronological
/// order and, within a point, in `WestgardRule::ALL` order. An empty input or
/// an SD of zero yields an empty list.
pub fn evaluate(results: &[QcResult], mean: f64, sd: f64) -> Vec<Violation> {
    evaluate_target(results, &TargetStatistics::new(mean, sd), DEFAULT_SD_EPSILON)
}

/// Evaluate against a `TargetStatistics`, treating any SD at or below
/// `sd_epsilon` as zero.
pub fn evaluate_target(
    results: &[QcResult],
    target: &TargetStatistics,
    sd_epsilon: f64,
) -> Vec<Violation> {
    if results.is_empty() {
        return Vec::new();
    }
    if target.is_degenerate(sd_epsilon) {
        tracing::debug!(
            mean = target.mean,
            sd = target.sd,
            results = results.len(),
            "degenerate target, no z-scores computable"
        );
        return Vec::new();
    }

    let points = scored_points(results, target);
    let mut violations = Vec::new();

    for index in 0..points.len() {
        let input = RuleInput {
            points: &points,
            index,
            target,
        };
        for rule in WestgardRule::ALL {
            if let Some(message) = rules::check(rule, &input) {
                violations.push(Violation::new(points[index].result.id.clone(), rule, message));
            }
        }
    }

    dedup_violations(violations)
}

/// Results in chronological order with their z-scores. Equal timestamps keep
/// their input order.
pub fn scored_points<'a>(results: &'a [QcResult], target: &TargetStatistics) -> Vec<ScoredPoint<'a>> {
    let mut ordered: Vec<&QcResult> = results.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);
    ordered
        .into_iter()
        .map(|result| ScoredPoint {
            result,
            z: target.z_score(result.value),
        })
        .collect()
}
