//! StoryErrorCode trait for machine-readable error reporting.

/// Every error enum implements this to expose a stable code string
/// that callers can match on without parsing messages.
pub trait StoryErrorCode {
    /// Returns the error code string (e.g., "ADAPTER_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ADAPTER_ERROR: &str = "ADAPTER_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXTRACTION_WARNING: &str = "EXTRACTION_WARNING";
