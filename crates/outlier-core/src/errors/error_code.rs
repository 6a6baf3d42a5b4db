//! OutlierErrorCode trait for structured error reporting.

/// Trait for mapping Outlier errors to stable error code strings.
/// Every error enum implements this so callers can branch on a code
/// instead of matching display text.
pub trait OutlierErrorCode {
    /// Returns the error code string (e.g., "EMPTY_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const NON_FINITE_INPUT: &str = "NON_FINITE_INPUT";
pub const UNSUPPORTED_LEVEL: &str = "UNSUPPORTED_LEVEL";
pub const UNSUPPORTED_SAMPLE_SIZE: &str = "UNSUPPORTED_SAMPLE_SIZE";
pub const INVALID_NEIGHBOR_ORDER: &str = "INVALID_NEIGHBOR_ORDER";
pub const DISTANCE_OVERFLOW: &str = "DISTANCE_OVERFLOW";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
