//! Error types for the settings layer

use preproc_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while loading, storing or updating settings
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// A persisted value could not be read back
    #[error("Invalid setting {key}: '{value}'")]
    InvalidSetting { key: String, value: String },

    /// Rejected configuration change or invalid merged configuration
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Caller lacks the role required for the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}

impl RepositoryError {
    /// Errors caused by the caller's input rather than storage
    pub fn is_rejection(&self) -> bool {
        matches!(self, RepositoryError::Config(_) | RepositoryError::Forbidden(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RepositoryError::InvalidSetting {
            key: "ai_max_tokens".to_string(),
            value: "lots".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid setting ai_max_tokens: 'lots'");

        let err: RepositoryError = CoreError::UnsupportedProvider("gemini".to_string()).into();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn test_io_error_is_not_rejection() {
        let err: RepositoryError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_rejection());
    }
}
