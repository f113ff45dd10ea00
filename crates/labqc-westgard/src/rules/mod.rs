//! Individual Westgard rule checks.
//!
//! Each check looks at the current point and, for window rules, the points
//! immediately before it in chronological order. A check returns the
//! violation message when the rule fires.

pub mod consecutive;
pub mod range;
pub mod single;

use labqc_core::{QcResult, TargetStatistics, WestgardRule};

/// A result paired with its z-score against the target.
#[derive(Debug, Clone, Copy)]
pub struct ScoredPoint<'a> {
    pub result: &'a QcResult,
    pub z: f64,
}

impl ScoredPoint<'_> {
    pub fn value(&self) -> f64 {
        self.result.value
    }
}

/// Which side of the mean a run of points sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            Self::Above => '+',
            Self::Below => '-',
        }
    }
}

/// View of the chronologically sorted series at one index.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'p, 'a> {
    pub points: &'p [ScoredPoint<'a>],
    pub index: usize,
    pub target: &'p TargetStatistics,
}

impl<'p, 'a> RuleInput<'p, 'a> {
    pub fn current(&self) -> &'p ScoredPoint<'a> {
        &self.points[self.index]
    }

    /// The `len` consecutive points ending at the current one, or `None`
    /// while fewer than `len - 1` earlier points exist.
    pub fn trailing(&self, len: usize) -> Option<&'p [ScoredPoint<'a>]> {
        if len == 0 || self.index + 1 < len {
            return None;
        }
        Some(&self.points[self.index + 1 - len..=self.index])
    }
}

/// Run one rule at the current point.
pub fn check(rule: WestgardRule, input: &RuleInput<'_, '_>) -> Option<String> {
    match rule {
        WestgardRule::OneTwoS => single::one_two_s(input),
        WestgardRule::OneThreeS => single::one_three_s(input),
        WestgardRule::TwoTwoS => consecutive::two_two_s(input),
        WestgardRule::RFourS => range::r_four_s(input),
        WestgardRule::FourOneS => consecutive::four_one_s(input),
        WestgardRule::TenX => consecutive::ten_x(input),
    }
}
