//! Provider client interface

use crate::error::Result;
use async_trait::async_trait;
use preproc_core::ProviderConfig;
use serde_json::Value;

/// Where a provider puts the completion text in its response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// `choices[0].message.content`
    OpenAI,
    /// `content[0].text`
    Anthropic,
}

impl ResponseShape {
    /// JSON pointer to the completion text
    pub fn content_pointer(&self) -> &'static str {
        match self {
            ResponseShape::OpenAI => "/choices/0/message/content",
            ResponseShape::Anthropic => "/content/0/text",
        }
    }

    /// Completion text of a raw response; empty when the path is missing
    pub fn completion_text(&self, raw: &Value) -> String {
        raw.pointer(self.content_pointer())
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

/// Async provider client trait
///
/// One implementation per remote backend. A call is a single request/response
/// exchange: no retries, no caching. Implementations return the provider's
/// raw JSON body; interpreting it is the extractor's job.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Send one completion request
    ///
    /// # Errors
    /// * `AssistError::Transport` - connection failure or timeout
    /// * `AssistError::UpstreamStatus` - any non-success HTTP status
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        config: &ProviderConfig,
    ) -> Result<Value>;

    /// Shape of the response body returned by [`ProviderClient::call`]
    fn response_shape(&self) -> ResponseShape;

    /// Get the name of this client
    fn name(&self) -> &str;
}
