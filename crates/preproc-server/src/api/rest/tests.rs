//! Tests for REST API components

#![cfg(test)]

use super::extractors::{require_admin, JsonExtractor, ROLE_HEADER};
use super::handlers::*;
use super::types::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::post,
    Router,
};
use preproc_core::{ProviderConfig, ProviderKind};
use tower::ServiceExt;

#[test]
fn test_config_view_masks_credential() {
    let config = ProviderConfig::new(ProviderKind::OpenAI).with_credential("sk-secret");
    let view = ConfigView::from(&config);

    assert_eq!(view.provider, "openai");
    assert_eq!(view.api_key, "********");
    assert!(view.has_api_key);

    let json = serde_json::to_string(&view).unwrap();
    assert!(!json.contains("sk-secret"));
}

#[test]
fn test_config_view_without_credential() {
    let view = ConfigView::from(&ProviderConfig::default());
    assert_eq!(view.api_key, "");
    assert!(!view.has_api_key);
    assert_eq!(view.temperature, 0.3);
}

#[test]
fn test_test_payload_accepts_sample_value_alias() {
    let payload: TestRequestPayload = serde_json::from_value(serde_json::json!({
        "sample_value": "42",
        "steps": [{"type": "Trim", "type_value": 12, "params": ""}]
    }))
    .unwrap();
    assert_eq!(payload.item_value, "42");
    assert_eq!(payload.steps.len(), 1);
}

#[tokio::test]
async fn test_health() {
    let response = health().await;
    assert_eq!(response.0.status, "healthy");
}

/// Minimal router with a JSON handler behind the admin gate
fn gated_app() -> Router {
    async fn echo(JsonExtractor(payload): JsonExtractor<ValidateRequestPayload>) -> String {
        payload.steps.len().to_string()
    }
    Router::new()
        .route("/gated", post(echo))
        .route_layer(middleware::from_fn(require_admin))
}

fn malformed_request(role: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/gated")
        .header("content-type", "application/json")
        .header(ROLE_HEADER, role)
        .body(Body::from("{\"steps\": 42"))
        .unwrap()
}

#[tokio::test]
async fn test_admin_gate_refuses_before_body_is_parsed() {
    let response = gated_app().oneshot(malformed_request("user")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_gate_lets_admins_reach_the_body_check() {
    let response = gated_app().oneshot(malformed_request("admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
