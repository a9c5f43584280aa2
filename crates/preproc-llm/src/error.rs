//! Error types for the generation pipeline

use preproc_core::CoreError;
use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, AssistError>;

/// Generation pipeline errors
///
/// Response parsing problems are deliberately absent: an answer that cannot
/// be parsed is replaced by heuristic suggestions instead of failing.
#[derive(Debug, Error)]
pub enum AssistError {
    /// Empty prompt
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remote provider selected without a credential
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// No client available for the configured provider
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Network failure or timeout talking to the provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP {code}: {body}")]
    UpstreamStatus { code: u16, body: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl AssistError {
    /// Transport and upstream status failures
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            AssistError::Transport(_) | AssistError::UpstreamStatus { .. }
        )
    }

    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AssistError::InvalidInput(_) => "invalid_input",
            AssistError::NotConfigured(_) => "not_configured",
            AssistError::UnsupportedProvider(_) => "unsupported_provider",
            AssistError::Transport(_) => "transport_error",
            AssistError::UpstreamStatus { .. } => "upstream_status_error",
            AssistError::InvalidConfiguration(_) => "invalid_configuration",
        }
    }
}

impl From<CoreError> for AssistError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedProvider(name) => AssistError::UnsupportedProvider(name),
            CoreError::InvalidValueType(value) => {
                AssistError::InvalidInput(format!("unknown value type '{}'", value))
            }
            other => AssistError::InvalidConfiguration(other.to_string()),
        }
    }
}
