use super::error_code::{self, ErrorCode};

/// Rule label errors.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("unknown Westgard rule: {label:?}")]
    UnknownRule { label: String },
}

impl ErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
