//! Westgard rule behaviour over whole series.

use chrono::{Duration, TimeZone, Utc};
use labqc_core::{QcResult, Violation, WestgardRule};
use labqc_westgard::dedup::merge_violations;
use labqc_westgard::evaluate;

fn make_series(values: &[f64]) -> Vec<QcResult> {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 7, 30, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            QcResult::new(
                format!("run-{}", i + 1),
                "TSH",
                "LOT-T3",
                start + Duration::hours(12 * i as i64),
                v,
            )
            .with_recorded_by("tech-1")
        })
        .collect()
}

fn rules_for<'a>(violations: &'a [Violation], id: &str) -> Vec<&'a str> {
    violations
        .iter()
        .filter(|v| v.result_id == id)
        .map(|v| v.rule.label())
        .collect()
}

// ── Degenerate inputs ────────────────────────────────────────────────────

#[test]
fn zero_sd_returns_empty_for_any_values() {
    let results = make_series(&[1.0, 1e9, -1e9, f64::MAX, 0.0]);
    assert!(evaluate(&results, 0.0, 0.0).is_empty());
    assert!(evaluate(&results, 123.0, 0.0).is_empty());
}

#[test]
fn empty_results_return_empty() {
    assert!(evaluate(&[], 90.0, 2.0).is_empty());
    assert!(evaluate(&[], 90.0, 0.0).is_empty());
}

#[test]
fn negative_or_nan_statistics_do_not_panic() {
    let results = make_series(&[1.0, 2.0, 3.0]);
    assert!(evaluate(&results, 2.0, -1.0).is_empty());
    assert!(evaluate(&results, f64::NAN, 1.0).is_empty());
    assert!(evaluate(&results, 2.0, f64::INFINITY).is_empty());
}

#[test]
fn nan_value_trips_nothing() {
    let results = make_series(&[90.0, f64::NAN, 90.0]);
    assert!(evaluate(&results, 90.0, 2.0).is_empty());
}

#[test]
fn nan_values_break_runs() {
    let mut values = vec![90.5; 10];
    values[5] = f64::NAN;
    let results = make_series(&values);
    assert!(evaluate(&results, 90.0, 2.0).is_empty());
}

#[test]
fn infinite_values_trip_single_point_and_range_rules() {
    for value in [f64::INFINITY, f64::NEG_INFINITY] {
        let results = make_series(&[90.0, value, 90.0]);
        let violations = evaluate(&results, 90.0, 2.0);
        assert_eq!(rules_for(&violations, "run-1"), Vec::<&str>::new());
        assert_eq!(rules_for(&violations, "run-2"), vec!["1-2s", "1-3s", "R-4s"]);
        assert_eq!(rules_for(&violations, "run-3"), vec!["R-4s"]);
    }
}

// ── Single-point rules ───────────────────────────────────────────────────

#[test]
fn one_three_s_point_also_emits_one_two_s() {
    let results = make_series(&[90.0, 97.0]);
    let violations = evaluate(&results, 90.0, 2.0);
    assert_eq!(rules_for(&violations, "run-2"), vec!["1-2s", "1-3s"]);
}

#[test]
fn end_to_end_scenario() {
    let results = make_series(&[90.0, 91.0, 89.0, 96.5, 90.0]);
    let violations = evaluate(&results, 90.0, 2.0);
    assert_eq!(rules_for(&violations, "run-4"), vec!["1-2s", "1-3s"]);
    assert_eq!(violations.len(), 2);
}

// ── Consecutive rules ────────────────────────────────────────────────────

#[test]
fn two_two_s_requires_same_side() {
    let violations = evaluate(&make_series(&[12.5, 7.5]), 10.0, 1.0);
    assert!(violations.iter().all(|v| v.rule != WestgardRule::TwoTwoS));

    let violations = evaluate(&make_series(&[7.5, 7.9]), 10.0, 1.0);
    assert_eq!(rules_for(&violations, "run-2"), vec!["1-2s", "2-2s"]);
}

#[test]
fn four_one_s_needs_four_points() {
    let three = evaluate(&make_series(&[11.5, 11.5, 11.5]), 10.0, 1.0);
    assert!(three.is_empty());

    let four = evaluate(&make_series(&[11.5, 11.5, 11.5, 11.5]), 10.0, 1.0);
    assert_eq!(rules_for(&four, "run-4"), vec!["4-1s"]);
    assert_eq!(four.len(), 1);
}

#[test]
fn four_one_s_fires_below_the_mean() {
    let violations = evaluate(&make_series(&[8.5, 8.9, 8.7, 8.6, 8.8]), 10.0, 1.0);
    assert_eq!(rules_for(&violations, "run-4"), vec!["4-1s"]);
    assert_eq!(rules_for(&violations, "run-5"), vec!["4-1s"]);
}

#[test]
fn ten_x_on_tenth_point_only() {
    let violations = evaluate(&make_series(&[10.1; 10]), 10.0, 1.0);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].result_id, "run-10");
    assert_eq!(violations[0].rule, WestgardRule::TenX);
}

#[test]
fn ten_x_keeps_firing_while_shift_persists() {
    let violations = evaluate(&make_series(&[9.8; 12]), 10.0, 1.0);
    let ids: Vec<_> = violations.iter().map(|v| v.result_id.as_str()).collect();
    assert_eq!(ids, vec!["run-10", "run-11", "run-12"]);
}

#[test]
fn r_four_s_uses_adjacent_pairs_only() {
    // mean, mean + 4.5 SD, mean
    let violations = evaluate(&make_series(&[50.0, 54.5, 50.0]), 50.0, 1.0);
    assert!(rules_for(&violations, "run-1").is_empty());
    assert!(rules_for(&violations, "run-2").contains(&"R-4s"));
    assert_eq!(rules_for(&violations, "run-3"), vec!["R-4s"]);
}

#[test]
fn r_four_s_ignores_non_adjacent_spread() {
    // run-1 to run-3 spans 5 SD but no adjacent pair exceeds 4 SD.
    let violations = evaluate(&make_series(&[47.5, 50.0, 52.5]), 50.0, 1.0);
    assert!(violations.iter().all(|v| v.rule != WestgardRule::RFourS));
}

// ── Deduplication ────────────────────────────────────────────────────────

#[test]
fn overlapping_input_is_deduplicated() {
    let mut results = make_series(&[95.0, 96.0]);
    results.push(results[1].clone());
    let violations = evaluate(&results, 90.0, 2.0);

    let mut keys: Vec<_> = violations.iter().map(|v| v.key()).collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
    assert_eq!(rules_for(&violations, "run-2"), vec!["1-2s", "2-2s"]);
}

#[test]
fn merging_overlapping_evaluations() {
    let results = make_series(&[90.0, 96.5, 90.0, 91.0]);
    let first = evaluate(&results[..3], 90.0, 2.0);
    let second = evaluate(&results, 90.0, 2.0);
    let merged = merge_violations([first.clone(), second]);
    assert_eq!(merged, first);
}

// ── Purity ───────────────────────────────────────────────────────────────

#[test]
fn evaluation_is_idempotent_and_leaves_input_untouched() {
    let results = make_series(&[90.0, 95.0, 95.5, 84.0, 90.0, 91.0]);
    let snapshot = results.clone();
    let a = evaluate(&results, 90.0, 2.0);
    let b = evaluate(&results, 90.0, 2.0);
    assert_eq!(a, b);
    assert_eq!(results, snapshot);
}
