//! TrustErrorCode trait for structured error reporting.

/// Trait for mapping errors to stable, machine-readable codes.
/// Every error enum implements this so callers can branch on the code
/// instead of parsing display strings.
pub trait TrustErrorCode {
    /// Returns the error code string (e.g., "GRAPH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const INVALID_SOURCE: &str = "INVALID_SOURCE";
pub const INFERENCE_ERROR: &str = "INFERENCE_ERROR";
pub const PATH_LIMIT: &str = "PATH_LIMIT";
pub const CANCELLED: &str = "CANCELLED";
