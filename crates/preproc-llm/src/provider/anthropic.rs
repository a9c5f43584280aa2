//! Anthropic provider implementation

use crate::client::{ProviderClient, ResponseShape};
use crate::error::Result;
use crate::provider::transport::send_json;
use async_trait::async_trait;
use preproc_core::ProviderConfig;
use reqwest::Client;
use serde_json::{json, Value};

/// Anthropic messages provider
pub struct AnthropicProvider {
    base_url: String,
    client: Client,
}

impl AnthropicProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com/v1";
    pub const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider
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
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
            "system": system_prompt,
            "messages": [
                {"role": "user", "content": user_prompt}
            ],
        })
    }
}

impl Default for AnthropicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for AnthropicProvider {
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        config: &ProviderConfig,
    ) -> Result<Value> {
        let body = Self::build_body(system_prompt, user_prompt, config);

        // The bearer header is set by the shared transport; the native API
        // reads x-api-key.
        let request = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &config.credential)
            .header("anthropic-version", Self::API_VERSION)
            .json(&body);

        send_json(request, "Anthropic", &config.credential, config.timeout_seconds).await
    }

    fn response_shape(&self) -> ResponseShape {
        ResponseShape::Anthropic
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preproc_core::ProviderKind;

    #[test]
    fn test_anthropic_provider_creation() {
        let provider = AnthropicProvider::new();
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.base_url(), "https://api.anthropic.com/v1");
        assert_eq!(provider.response_shape(), ResponseShape::Anthropic);
    }

    #[test]
    fn test_request_body_shape() {
        let config = ProviderConfig::new(ProviderKind::Anthropic)
            .with_model("claude-3-5-haiku-latest")
            .with_max_tokens(800);

        let body = AnthropicProvider::build_body("sys", "usr", &config);
        assert_eq!(body["model"], "claude-3-5-haiku-latest");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["system"], "sys");
        assert_eq!(body["messages"], json!([{"role": "user", "content": "usr"}]));
        assert!(body.get("temperature").is_some());
    }
}
