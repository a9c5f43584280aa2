//! Custom extractors and middleware
//!
//! JSON bodies with readable rejections, the caller's role, and the role
//! gates layered in front of protected routes.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use preproc_core::UserRole;
use serde_json::json;
use std::convert::Infallible;

/// Header set by the fronting gateway with the authenticated user's role
pub const ROLE_HEADER: &str = "x-user-role";

/// Custom JSON extractor with better error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                let error_message = match rejection {
                    JsonRejection::JsonDataError(err) => {
                        format!("Invalid JSON data: {}", err)
                    }
                    JsonRejection::JsonSyntaxError(err) => {
                        format!("JSON syntax error: {}", err)
                    }
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header".to_string()
                    }
                    _ => format!("Failed to parse JSON: {}", rejection),
                };

                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": error_message,
                        "status": 400,
                    })),
                ))
            }
        }
    }
}

/// Role of the caller, read from [`ROLE_HEADER`]
///
/// A missing or unrecognised header means a plain user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerRole(pub UserRole);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CallerRole
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(UserRole::parse_lenient)
            .unwrap_or_default();
        Ok(Self(role))
    }
}

/// Gate for generation, validation, preview and info.
///
/// Runs as a route layer, so a caller without rights is refused before the
/// request body is read.
pub async fn require_admin(
    CallerRole(role): CallerRole,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    if !role.can_generate() {
        return Err(ServerError::Forbidden(
            "the preprocessing assistant requires administrator access".to_string(),
        ));
    }
    Ok(next.run(request).await)
}

/// Gate for reading and replacing the provider configuration
pub async fn require_super_admin(
    CallerRole(role): CallerRole,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    if !role.can_manage_config() {
        return Err(ServerError::Forbidden(
            "the assistant configuration requires super administrator access".to_string(),
        ));
    }
    Ok(next.run(request).await)
}
