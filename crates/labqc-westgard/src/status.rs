use std::fmt;

use serde::{Deserialize, Serialize};

use labqc_core::{Violation, WestgardRule};

/// Overall decision for a run (or a single point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No rule fired.
    InControl,
    /// Only 1-2s fired.
    Warning,
    /// At least one rejection-class rule fired.
    Rejected,
}

impl RunStatus {
    pub fn from_violations<'a, I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a Violation>,
    {
        Self::from_rules(violations.into_iter().map(|v| v.rule))
    }

    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = WestgardRule>,
    {
        rules
            .into_iter()
            .map(|rule| {
                if rule.is_rejection() {
                    Self::Rejected
                } else {
                    Self::Warning
                }
            })
            .max()
            .unwrap_or(Self::InControl)
    }

    /// Whether the run may be reported (warnings allowed).
    pub fn is_accepted(&self) -> bool {
        *self != Self::Rejected
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InControl => "in_control",
            Self::Warning => "warning",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
