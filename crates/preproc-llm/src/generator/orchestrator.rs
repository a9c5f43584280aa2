//! End-to-end generation: provider dispatch, extraction and fallback

use crate::client::ResponseShape;
use crate::error::{AssistError, Result};
use crate::generator::heuristic;
use crate::generator::prompt_builder::PromptBuilder;
use crate::generator::response_extractor::{extract_step_objects, to_suggestions};
use crate::provider::ProviderRegistry;
use preproc_core::{validate_steps, GenerationRequest, ProviderConfig, StepSuggestion};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Turns generation requests into step suggestions
///
/// Holds no mutable state; the provider config is passed per call so callers
/// can hand in a snapshot.
#[derive(Debug, Clone)]
pub struct GenerationOrchestrator {
    registry: ProviderRegistry,
    prompts: PromptBuilder,
}

impl GenerationOrchestrator {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            prompts: PromptBuilder::default(),
        }
    }

    /// Orchestrator backed by the real OpenAI and Anthropic endpoints
    pub fn with_defaults() -> Self {
        Self::new(ProviderRegistry::with_defaults())
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Generate steps for `request` with the provider described by `config`
    ///
    /// # Errors
    /// * `InvalidInput` - blank prompt
    /// * `NotConfigured` - remote provider without a credential
    /// * `UnsupportedProvider` - no client registered for the provider
    /// * `Transport` / `UpstreamStatus` - the provider call failed
    ///
    /// A provider answer that cannot be turned into valid steps is not an
    /// error: the heuristic result for the same request is returned instead.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
    ) -> Result<Vec<StepSuggestion>> {
        if request.is_blank() {
            return Err(AssistError::InvalidInput("prompt must not be empty".to_string()));
        }

        if config.provider.requires_credential() && !config.has_credential() {
            return Err(AssistError::NotConfigured(format!(
                "an API key is required for provider '{}'",
                config.provider
            )));
        }

        if config.provider.is_heuristic() {
            debug!(provider = %config.provider, "generating steps with keyword heuristic");
            return Ok(heuristic::generate_for(request));
        }

        let client = self
            .registry
            .get(config.provider)
            .ok_or_else(|| AssistError::UnsupportedProvider(config.provider.to_string()))?;

        let system_prompt = self.prompts.build_system_prompt(request.value_type);
        let user_prompt = self
            .prompts
            .build_user_prompt(&request.prompt, &request.sample_value);
        trace_text(config.debug, "user prompt", &user_prompt);

        let deadline = Duration::from_secs(config.timeout_seconds);
        let raw = tokio::time::timeout(deadline, client.call(&system_prompt, &user_prompt, config))
            .await
            .map_err(|_| {
                AssistError::Transport(format!(
                    "{} did not answer within {}s",
                    client.name(),
                    config.timeout_seconds
                ))
            })??;

        let shape = client.response_shape();
        trace_text(config.debug, "completion", &shape.completion_text(&raw));

        match usable_steps(&raw, shape) {
            Some(steps) => {
                info!(provider = client.name(), steps = steps.len(), "generated steps");
                Ok(steps)
            }
            None => {
                warn!(
                    provider = client.name(),
                    "provider answer held no usable steps, using heuristic suggestions"
                );
                Ok(heuristic::generate_for(request))
            }
        }
    }
}

/// Extracted, validated and converted steps; `None` when any stage fails or
/// the list is empty
fn usable_steps(raw: &Value, shape: ResponseShape) -> Option<Vec<StepSuggestion>> {
    let items = extract_step_objects(raw, shape)?;
    let report = validate_steps(&items);
    if !report.ok {
        debug!(errors = ?report.errors, "extracted steps failed validation");
        return None;
    }
    to_suggestions(&items).filter(|steps| !steps.is_empty())
}

fn trace_text(verbose: bool, label: &str, text: &str) {
    if verbose {
        info!(label, text, "provider exchange");
    } else {
        debug!(label, text, "provider exchange");
    }
}
