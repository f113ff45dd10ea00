use chrono::{Duration, TimeZone, Utc};
use labqc_core::{QcResult, WestgardRule};
use labqc_westgard::evaluate;
use proptest::prelude::*;

fn make_series(values: &[f64]) -> Vec<QcResult> {
    let start = Utc.with_ymd_and_hms(2023, 11, 20, 9, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            QcResult::new(
                format!("p{i}"),
                "ALB",
                "LOT-P",
                start + Duration::minutes(30 * i as i64),
                v,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn zero_sd_never_flags(values in prop::collection::vec(-1e6f64..1e6, 0..40), mean in -1e3f64..1e3) {
        let results = make_series(&values);
        prop_assert!(evaluate(&results, mean, 0.0).is_empty());
    }

    #[test]
    fn no_duplicate_keys(values in prop::collection::vec(80.0f64..100.0, 0..60)) {
        let results = make_series(&values);
        let violations = evaluate(&results, 90.0, 2.0);
        let mut keys: Vec<_> = violations.iter().map(|v| v.key()).collect();
        let n = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), n);
    }

    #[test]
    fn input_order_does_not_matter(
        values in prop::collection::vec(80.0f64..100.0, 1..40),
        seed in any::<u64>(),
    ) {
        let results = make_series(&values);
        let expected = evaluate(&results, 90.0, 2.0);

        // Deterministic shuffle: rotate then reverse halves.
        let mut shuffled = results.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled[..len / 2].reverse();

        prop_assert_eq!(evaluate(&shuffled, 90.0, 2.0), expected);
    }

    #[test]
    fn evaluation_is_idempotent(values in prop::collection::vec(80.0f64..100.0, 0..40)) {
        let results = make_series(&values);
        prop_assert_eq!(evaluate(&results, 90.0, 2.0), evaluate(&results, 90.0, 2.0));
    }

    #[test]
    fn one_three_s_implies_one_two_s(values in prop::collection::vec(70.0f64..110.0, 0..40)) {
        let results = make_series(&values);
        let violations = evaluate(&results, 90.0, 2.0);
        for v in violations.iter().filter(|v| v.rule == WestgardRule::OneThreeS) {
            prop_assert!(violations
                .iter()
                .any(|w| w.result_id == v.result_id && w.rule == WestgardRule::OneTwoS));
        }
    }

    #[test]
    fn every_violation_refers_to_an_input(values in prop::collection::vec(80.0f64..100.0, 0..40)) {
        let results = make_series(&values);
        for v in evaluate(&results, 90.0, 2.0) {
            prop_assert!(results.iter().any(|r| r.id == v.result_id));
        }
    }

    #[test]
    fn points_within_one_sd_only_trip_ten_x(values in prop::collection::vec(89.0f64..91.0, 0..40)) {
        let results = make_series(&values);
        for v in evaluate(&results, 90.0, 2.0) {
            prop_assert_eq!(v.rule.label(), "10-x");
        }
    }
}
