//! Single-point rules: 1-2s and 1-3s.

use labqc_core::constants::{REJECTION_LIMIT_SD, WARNING_LIMIT_SD};

use super::RuleInput;

/// |z| > 2. Warning only.
pub fn one_two_s(input: &RuleInput<'_, '_>) -> Option<String> {
    beyond(input, "1-2s", WARNING_LIMIT_SD)
}

/// |z| > 3.
pub fn one_three_s(input: &RuleInput<'_, '_>) -> Option<String> {
    beyond(input, "1-3s", REJECTION_LIMIT_SD)
}

fn beyond(input: &RuleInput<'_, '_>, label: &str, limit: f64) -> Option<String> {
    let point = input.current();
    // NaN compares false and never fires.
    (point.z.abs() > limit).then(|| {
        format!(
            "{label}: value {} is {:.2} SD from mean {} (limit ±{limit} SD)",
            point.value(),
            point.z.abs(),
            input.target.mean,
        )
    })
}
