use super::error_code::ErrorCode;
use super::{ConfigError, ProviderError, RuleError, StatisticsError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum QcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

impl ErrorCode for QcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Provider(e) => e.error_code(),
            Self::Statistics(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
        }
    }
}

/// Result alias used across the workspace.
pub type LabQcResult<T> = Result<T, QcError>;
