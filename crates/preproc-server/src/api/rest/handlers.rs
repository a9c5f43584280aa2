//! API endpoint handlers

use super::extractors::{CallerRole, JsonExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use preproc_core::{validate_steps, ConfigUpdate, GenerationRequest, ValidationReport, MAX_STEPS};
use preproc_llm::{preview_steps, DEFAULT_PROMPTS};
use tracing::{info, warn};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Suggest steps for a free-text request
#[axum::debug_handler]
pub(super) async fn generate(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<GenerationRequest>,
) -> Result<Json<GenerateResponsePayload>, ServerError> {
    let config = state.config.snapshot().await;
    if !config.enabled {
        return Err(ServerError::Disabled(
            "the AI assistant has been disabled by an administrator".to_string(),
        ));
    }

    info!(
        provider = %config.provider,
        value_type = %request.value_type,
        has_sample = !request.sample_value.is_empty(),
        "Received generation request"
    );

    let steps = state
        .orchestrator
        .generate(&request, &config)
        .await
        .map_err(|e| {
            warn!(error = %e, "step generation failed");
            ServerError::from(e)
        })?;

    Ok(Json(GenerateResponsePayload {
        success: true,
        steps,
    }))
}

/// Check the structure of a step list
pub(super) async fn validate(
    JsonExtractor(payload): JsonExtractor<ValidateRequestPayload>,
) -> Json<ValidationReport> {
    (Json(validate_steps(&payload.steps)))
}

/// Simulated run of a step list
pub(super) async fn test_steps(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<TestRequestPayload>,
) -> Json<TestResponsePayload> {
    Json(TestResponsePayload {
        success: true,
        preview: preview_steps(&payload.item_value, &payload.steps, &state.catalog),
    })
}

/// Catalog, presets and current switches
pub(super) async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let config = state.config.snapshot().await;
    Json(InfoResponse {
        catalog_version: state.catalog.version(),
        catalog: state.catalog.entries(),
        suggested_types: state.catalog.ai_suggested().map(|entry| entry.id).collect(),
        default_prompts: DEFAULT_PROMPTS,
        max_steps: MAX_STEPS,
        provider: config.provider.to_string(),
        enabled: config.enabled,
        debug: config.debug,
    })
}

/// Current provider configuration, credential masked
pub(super) async fn get_config(State(state): State<AppState>) -> Json<ConfigView> {
    let config = state.config.snapshot().await;
    Json(ConfigView::from(config.as_ref()))
}

/// Replace the provider configuration; all fields apply or none do
pub(super) async fn update_config(
    State(state): State<AppState>,
    CallerRole(role): CallerRole,
    JsonExtractor(update): JsonExtractor<ConfigUpdate>,
) -> Result<Json<ConfigView>, ServerError> {
    let updated = state.config.update(role, update).await?;
    Ok(Json(ConfigView::from(updated.as_ref())))
}
