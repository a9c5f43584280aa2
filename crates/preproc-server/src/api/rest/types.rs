//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use preproc_core::{CatalogEntry, ProviderConfig, StepCatalog, StepSuggestion};
use preproc_llm::{GenerationOrchestrator, PromptPreset, StepPreview};
use preproc_repository::ConfigStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<GenerationOrchestrator>,
    pub config: Arc<ConfigStore>,
    pub catalog: StepCatalog,
}

impl AppState {
    /// State backed by the real provider endpoints
    pub fn new(config: Arc<ConfigStore>) -> Self {
        Self::with_orchestrator(config, GenerationOrchestrator::with_defaults())
    }

    pub fn with_orchestrator(config: Arc<ConfigStore>, orchestrator: GenerationOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            config,
            catalog: StepCatalog::standard(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Generated steps
#[derive(Debug, Serialize)]
pub struct GenerateResponsePayload {
    pub success: bool,
    pub steps: Vec<StepSuggestion>,
}

/// Raw steps to check; kept untyped so malformed entries can be reported
#[derive(Debug, Deserialize)]
pub struct ValidateRequestPayload {
    pub steps: Vec<Value>,
}

/// Steps to run through the simulated test
#[derive(Debug, Deserialize)]
pub struct TestRequestPayload {
    #[serde(default, alias = "sample_value")]
    pub item_value: String,
    pub steps: Vec<StepSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct TestResponsePayload {
    pub success: bool,
    #[serde(flatten)]
    pub preview: StepPreview,
}

/// Everything a client needs to build the assistant form
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub catalog_version: u32,
    pub catalog: &'static [CatalogEntry],
    /// Ids a model is steered towards
    pub suggested_types: Vec<i64>,
    pub default_prompts: &'static [PromptPreset],
    pub max_steps: usize,
    pub provider: String,
    pub enabled: bool,
    pub debug: bool,
}

/// Provider configuration as shown to administrators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigView {
    pub provider: String,
    /// Always masked
    pub api_key: String,
    pub has_api_key: bool,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
    pub enabled: bool,
    pub debug: bool,
}

impl From<&ProviderConfig> for ConfigView {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            provider: config.provider.to_string(),
            api_key: config.masked_credential(),
            has_api_key: config.has_credential(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_seconds: config.timeout_seconds,
            enabled: config.enabled,
            debug: config.debug,
        }
    }
}
