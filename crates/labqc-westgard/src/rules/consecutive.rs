//! Same-side consecutive rules: 2-2s, 4-1s, 10-x.
//!
//! All points in the window must sit on the same side; a mix never fires.

use labqc_core::constants::{PAIR_LIMIT_SD, PAIR_WINDOW, SHIFT_WINDOW, TREND_LIMIT_SD, TREND_WINDOW};

use super::{RuleInput, ScoredPoint, Side};

/// Current and previous point both beyond 2 SD on the same side.
pub fn two_two_s(input: &RuleInput<'_, '_>) -> Option<String> {
    let window = input.trailing(PAIR_WINDOW)?;
    let side = side_beyond(window, PAIR_LIMIT_SD)?;
    Some(format!(
        "2-2s: {PAIR_WINDOW} consecutive results beyond {}{PAIR_LIMIT_SD} SD",
        side.sign()
    ))
}

/// Current and three preceding points all beyond 1 SD on the same side.
pub fn four_one_s(input: &RuleInput<'_, '_>) -> Option<String> {
    let window = input.trailing(TREND_WINDOW)?;
    let side = side_beyond(window, TREND_LIMIT_SD)?;
    Some(format!(
        "4-1s: {TREND_WINDOW} consecutive results beyond {}{TREND_LIMIT_SD} SD",
        side.sign()
    ))
}

/// Current and nine preceding points all strictly above, or all strictly
/// below, the mean.
pub fn ten_x(input: &RuleInput<'_, '_>) -> Option<String> {
    let window = input.trailing(SHIFT_WINDOW)?;
    let mean = input.target.mean;
    let side = if window.iter().all(|p| p.value() > mean) {
        Side::Above
    } else if window.iter().all(|p| p.value() < mean) {
        Side::Below
    } else {
        return None;
    };
    Some(format!(
        "10-x: {SHIFT_WINDOW} consecutive results {} the mean",
        side.name()
    ))
}

/// The side every point's z-score lies beyond `limit` on, if they agree.
fn side_beyond(window: &[ScoredPoint<'_>], limit: f64) -> Option<Side> {
    if window.iter().all(|p| p.z > limit) {
        Some(Side::Above)
    } else if window.iter().all(|p| p.z < -limit) {
        Some(Side::Below)
    } else {
        None
    }
}
