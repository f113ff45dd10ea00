//! ErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers (UI layers, logs) can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
pub const TARGET_NOT_FOUND: &str = "TARGET_NOT_FOUND";
pub const STATISTICS_ERROR: &str = "STATISTICS_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
