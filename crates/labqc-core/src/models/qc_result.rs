use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measured value of a control material for a test parameter.
///
/// The timestamp is only used for ordering. Results are never mutated by
/// the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QcResult {
    /// Unique, stable identifier within a series.
    pub id: String,
    /// Test parameter (analyte) this result belongs to.
    pub test_id: String,
    /// Control material / lot this result belongs to.
    pub control_id: String,
    /// When the control was run.
    pub timestamp: DateTime<Utc>,
    /// Measured value.
    pub value: f64,
    /// Who recorded the run.
    #[serde(default)]
    pub recorded_by: String,
}

impl QcResult {
    pub fn new(
        id: impl Into<String>,
        test_id: impl Into<String>,
        control_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            test_id: test_id.into(),
            control_id: control_id.into(),
            timestamp,
            value,
            recorded_by: String::new(),
        }
    }

    /// Set the technician who recorded the run.
    pub fn with_recorded_by(mut self, recorded_by: impl Into<String>) -> Self {
        self.recorded_by = recorded_by.into();
        self
    }

    /// Whether this result belongs to the given (test, control) series.
    pub fn belongs_to(&self, test_id: &str, control_id: &str) -> bool {
        self.test_id == test_id && self.control_id == control_id
    }
}
