use chrono::{TimeZone, Utc};
use labqc_core::{QcResult, QcSeries, TargetStatistics, Violation, WestgardRule};
use labqc_core::models::Severity;

fn result(id: &str, test_id: &str, control_id: &str, day: u32, value: f64) -> QcResult {
    QcResult::new(
        id,
        test_id,
        control_id,
        Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
        value,
    )
}

#[test]
fn qc_result_deserializes_without_recorded_by() {
    let json = r#"{
        "id": "r1",
        "test_id": "GLU",
        "control_id": "LOT-A",
        "timestamp": "2024-03-01T08:00:00Z",
        "value": 5.4
    }"#;
    let r: QcResult = serde_json::from_str(json).unwrap();
    assert_eq!(r.recorded_by, "");
    assert_eq!(r, result("r1", "GLU", "LOT-A", 1, 5.4));
}

#[test]
fn series_filters_foreign_results() {
    let series = QcSeries::new(
        "GLU",
        "LOT-A",
        TargetStatistics::new(5.5, 0.2),
        vec![
            result("r1", "GLU", "LOT-A", 1, 5.4),
            result("r2", "GLU", "LOT-B", 2, 9.9),
            result("r3", "CHOL", "LOT-A", 3, 4.1),
            result("r4", "GLU", "LOT-A", 4, 5.6).with_recorded_by("tech-7"),
        ],
    );
    let ids: Vec<_> = series.homogeneous_results().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["r1", "r4"]);
    assert_eq!(series.len(), 4);
}

#[test]
fn violation_severity_follows_rule() {
    let warning = Violation::new("r1", WestgardRule::OneTwoS, "warn");
    let reject = Violation::new("r1", WestgardRule::TwoTwoS, "reject");
    assert_eq!(warning.severity(), Severity::Warning);
    assert!(!warning.is_rejection());
    assert_eq!(reject.severity(), Severity::Rejection);
    assert_eq!(reject.key(), ("r1", WestgardRule::TwoTwoS));
}

#[test]
fn violation_serializes_rule_label() {
    let v = Violation::new("r9", WestgardRule::FourOneS, "4 above +1SD");
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["rule"], "4-1s");
    assert_eq!(json["result_id"], "r9");
}
