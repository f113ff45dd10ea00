//! Target statistics errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while establishing or validating a target.
#[derive(Debug, thiserror::Error)]
pub enum StatisticsError {
    #[error("insufficient baseline data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("non-finite baseline value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("non-finite target parameter: {name}")]
    NonFiniteParameter { name: &'static str },

    #[error("standard deviation must be non-negative, got {sd}")]
    NegativeStandardDeviation { sd: f64 },
}

impl ErrorCode for StatisticsError {
    fn error_code(&self) -> &'static str {
        error_code::STATISTICS_ERROR
    }
}
