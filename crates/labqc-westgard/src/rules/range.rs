//! R-4s: range between two consecutive runs.

use labqc_core::constants::{PAIR_WINDOW, RANGE_LIMIT_SD};

use super::RuleInput;

/// |current - previous| > 4 SD. Only the adjacent pair is compared.
pub fn r_four_s(input: &RuleInput<'_, '_>) -> Option<String> {
    let window = input.trailing(PAIR_WINDOW)?;
    let range = (window[1].value() - window[0].value()).abs();
    let limit = RANGE_LIMIT_SD * input.target.sd;
    (range > limit).then(|| {
        format!("R-4s: range {range} between consecutive runs exceeds {RANGE_LIMIT_SD} SD ({limit})")
    })
}
