//! QC data model: results, targets, rules, and violations.

pub mod qc_result;
pub mod qc_series;
pub mod rule;
pub mod target_statistics;
pub mod violation;

pub use qc_result::QcResult;
pub use qc_series::QcSeries;
pub use rule::{Severity, WestgardRule};
pub use target_statistics::TargetStatistics;
pub use violation::Violation;
