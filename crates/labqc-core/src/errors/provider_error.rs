//! Results provider errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by an upstream results provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no target statistics for test {test_id} / control {control_id}")]
    TargetNotFound { test_id: String, control_id: String },

    #[error("results provider unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetNotFound { .. } => error_code::TARGET_NOT_FOUND,
            Self::Unavailable { .. } => error_code::PROVIDER_ERROR,
        }
    }
}
