//! DarpiErrorCode trait for structured error reporting.

/// Trait for mapping darpi errors to stable error code strings.
/// Every error enum implements this so reporting layers can branch on
/// the code instead of parsing messages.
pub trait DarpiErrorCode {
    /// Returns the error code string (e.g., "INVALID_PARAMETER_RANGE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PARAMETER_TYPE: &str = "INVALID_PARAMETER_TYPE";
pub const INVALID_PARAMETER_RANGE: &str = "INVALID_PARAMETER_RANGE";
pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
pub const PERCENTILE_NOT_FOUND: &str = "PERCENTILE_NOT_FOUND";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const DUPLICATE_RISK: &str = "DUPLICATE_RISK";
pub const EMPTY_PORTFOLIO: &str = "EMPTY_PORTFOLIO";
pub const PORTFOLIO_PARSE_ERROR: &str = "PORTFOLIO_PARSE_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
