//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use preproc_core::CoreError;
use preproc_llm::AssistError;
use preproc_repository::RepositoryError;
use serde_json::json;
use thiserror::Error;

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed or empty request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Remote provider selected without credentials
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Configured provider has no client
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Provider unreachable or answered with an error status
    #[error("Provider error: {0}")]
    Provider(String),

    /// Caller role too low
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Assistant switched off by an administrator
    #[error("Assistant disabled: {0}")]
    Disabled(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotConfigured(_) => StatusCode::PRECONDITION_FAILED,
            ServerError::UnsupportedProvider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Provider(_) => StatusCode::BAD_GATEWAY,
            ServerError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServerError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
            ServerError::Disabled(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<AssistError> for ServerError {
    fn from(err: AssistError) -> Self {
        match err {
            AssistError::InvalidInput(msg) => ServerError::InvalidRequest(msg),
            AssistError::NotConfigured(msg) => ServerError::NotConfigured(msg),
            AssistError::UnsupportedProvider(msg) => ServerError::UnsupportedProvider(msg),
            err @ (AssistError::Transport(_) | AssistError::UpstreamStatus { .. }) => {
                ServerError::Provider(err.to_string())
            }
            AssistError::InvalidConfiguration(msg) => ServerError::InvalidConfiguration(msg),
        }
    }
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Forbidden(msg) => ServerError::Forbidden(msg),
            CoreError::InvalidSteps(_) | CoreError::InvalidValueType(_) => {
                ServerError::InvalidRequest(err.to_string())
            }
            CoreError::Injection(msg) => ServerError::InternalError(msg),
            CoreError::UnsupportedProvider(_) | CoreError::InvalidConfiguration { .. } => {
                ServerError::InvalidConfiguration(err.to_string())
            }
        }
    }
}

impl From<RepositoryError> for ServerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Forbidden(msg) => ServerError::Forbidden(msg),
            RepositoryError::Config(core) => core.into(),
            other => ServerError::InternalError(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
