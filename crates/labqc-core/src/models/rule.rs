use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{PAIR_WINDOW, SHIFT_WINDOW, TREND_WINDOW};
use crate::errors::RuleError;

/// The six Westgard control rules. The set is closed.
///
/// Serialized with the laboratory label (`"1-2s"`, `"R-4s"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WestgardRule {
    /// One point beyond ±2 SD. Warning only.
    #[serde(rename = "1-2s")]
    OneTwoS,
    /// One point beyond ±3 SD.
    #[serde(rename = "1-3s")]
    OneThreeS,
    /// Two consecutive points beyond 2 SD on the same side.
    #[serde(rename = "2-2s")]
    TwoTwoS,
    /// Range between two consecutive points exceeds 4 SD.
    #[serde(rename = "R-4s")]
    RFourS,
    /// Four consecutive points beyond 1 SD on the same side.
    #[serde(rename = "4-1s")]
    FourOneS,
    /// Ten consecutive points on the same side of the mean.
    #[serde(rename = "10-x")]
    TenX,
}

impl WestgardRule {
    /// All rules, in the order they are checked at each point.
    pub const ALL: [WestgardRule; 6] = [
        Self::OneTwoS,
        Self::OneThreeS,
        Self::TwoTwoS,
        Self::RFourS,
        Self::FourOneS,
        Self::TenX,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneTwoS => "1-2s",
            Self::OneThreeS => "1-3s",
            Self::TwoTwoS => "2-2s",
            Self::RFourS => "R-4s",
            Self::FourOneS => "4-1s",
            Self::TenX => "10-x",
        }
    }

    /// Number of consecutive points the rule inspects, including the current one.
    pub fn window(&self) -> usize {
        match self {
            Self::OneTwoS | Self::OneThreeS => 1,
            Self::TwoTwoS | Self::RFourS => PAIR_WINDOW,
            Self::FourOneS => TREND_WINDOW,
            Self::TenX => SHIFT_WINDOW,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::OneTwoS => Severity::Warning,
            _ => Severity::Rejection,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.severity() == Severity::Rejection
    }
}

impl fmt::Display for WestgardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WestgardRule {
    type Err = RuleError;

    /// Parses the laboratory label. Case-insensitive, so `r-4s` and `10-X` work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RuleError::UnknownRule {
                label: trimmed.to_string(),
            })
    }
}

/// How a downstream consumer should treat a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory; the run is not rejected on this alone.
    Warning,
    /// The analytical run should be rejected.
    Rejection,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Rejection => "rejection",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
