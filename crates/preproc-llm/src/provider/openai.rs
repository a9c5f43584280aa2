//! OpenAI provider implementation

use crate::client::{ProviderClient, ResponseShape};
use crate::error::Result;
use crate::provider::transport::send_json;
use async_trait::async_trait;
use preproc_core::ProviderConfig;
use reqwest::Client;
use serde_json::{json, Value};

/// OpenAI chat-completions provider
///
/// Works with any endpoint speaking the same protocol (Azure OpenAI gateways,
/// self-hosted compatible servers) through [`OpenAIProvider::with_base_url`].
/// Certificate verification is always on.
pub struct OpenAIProvider {
    base_url: String,
    client: Client,
}

impl OpenAIProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Create a new OpenAI provider
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create with custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn build_body(system_prompt: &str, user_prompt: &str, config: &ProviderConfig) -> Value {
        json!({
            "model": config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "temperature": config.temperature,
            "max_tokens": config.max_tokens,
        })
    }
}

impl Default for OpenAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for OpenAIProvider {
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        config: &ProviderConfig,
    ) -> Result<Value> {
        let body = Self::build_body(system_prompt, user_prompt, config);

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);

        send_json(request, "OpenAI", &config.credential, config.timeout_seconds).await
    }

    fn response_shape(&self) -> ResponseShape {
        ResponseShape::OpenAI
    }

    fn name(&self) -> &str {
        "openai"
    }
}
