//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading or writing a local file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON encoding of persisted state failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_messages() {
        assert_eq!(
            AppError::validation("Name is required").to_string(),
            "Validation error: Name is required"
        );
        assert_eq!(AppError::not_found("Kelas k9").to_string(), "Not found: Kelas k9");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = AppError::from(crate::config::ConfigError::Validation("bad".to_string()));
        assert_eq!(err.to_string(), "Validation failed: bad");
    }
}
