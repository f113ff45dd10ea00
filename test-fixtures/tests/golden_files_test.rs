//! Sanity checks on the golden files themselves.

use labqc_core::WestgardRule;
use test_fixtures::{fixture_exists, load_fixture_value, westgard_scenarios};

#[test]
fn westgard_scenarios_are_present() {
    let scenarios = westgard_scenarios();
    assert!(scenarios.len() >= 8, "found {scenarios:?}");
    assert!(fixture_exists("golden/westgard/single_outlier.json"));
}

#[test]
fn every_scenario_is_well_formed() {
    for path in westgard_scenarios() {
        let fixture = load_fixture_value(&path);
        let input = &fixture["input"];
        assert!(input["mean"].is_f64(), "{path}: mean");
        assert!(input["sd"].as_f64().is_some_and(|sd| sd >= 0.0), "{path}: sd");

        let results = input["results"].as_array().expect("results array");
        let mut ids: Vec<&str> = results.iter().filter_map(|r| r["id"].as_str()).collect();
        assert_eq!(ids.len(), results.len(), "{path}: every result has an id");
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), results.len(), "{path}: ids are unique");

        for v in fixture["expected"]["violations"].as_array().expect("violations array") {
            let rule = v["rule"].as_str().expect("rule label");
            assert!(rule.parse::<WestgardRule>().is_ok(), "{path}: bad rule {rule}");
            let id = v["result_id"].as_str().expect("result id");
            assert!(ids.contains(&id), "{path}: violation on unknown id {id}");
        }
    }
}
