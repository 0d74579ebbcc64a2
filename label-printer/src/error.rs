//! Error types for the print core

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Print core error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// Malformed descriptor (e.g. negative quantity)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Result type for print core operations
pub type PrintResult<T> = Result<T, PrintError>;

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::Validation(msg) => AppError::with_message(ErrorCode::ValidationFailed, msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::http::StatusCode;

    #[test]
    fn test_into_app_error() {
        let err: AppError = PrintError::Validation("label 3 has negative quantity -1".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("label 3"));
    }
}
