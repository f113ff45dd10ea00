//! Error handling for LabQC.
//! One error enum per subsystem, `thiserror` only.
//!
//! The Westgard evaluator itself never fails; these cover configuration,
//! result providers, target setup, and rule labels.

pub mod config_error;
pub mod error_code;
pub mod provider_error;
pub mod qc_error;
pub mod rule_error;
pub mod statistics_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use provider_error::ProviderError;
pub use qc_error::{LabQcResult, QcError};
pub use rule_error::RuleError;
pub use statistics_error::StatisticsError;
