use serde::{Deserialize, Serialize};

use super::{Severity, WestgardRule};

/// One detected rule breach, tied to exactly one QC result by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub result_id: String,
    pub rule: WestgardRule,
    pub message: String,
}

impl Violation {
    pub fn new(result_id: impl Into<String>, rule: WestgardRule, message: impl Into<String>) -> Self {
        Self {
            result_id: result_id.into(),
            rule,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }

    pub fn is_rejection(&self) -> bool {
        self.rule.is_rejection()
    }

    /// Deduplication key. Message text is not part of it.
    pub fn key(&self) -> (&str, WestgardRule) {
        (self.result_id.as_str(), self.rule)
    }
}
