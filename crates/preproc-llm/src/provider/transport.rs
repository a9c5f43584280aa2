//! Shared HTTP exchange for remote providers

use crate::error::{AssistError, Result};
use reqwest::RequestBuilder;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Send a prepared POST once and classify the outcome.
///
/// The request must already carry its JSON body, which also sets the
/// `Content-Type` header.
///
/// A success status with a body that is not JSON is returned as a JSON string
/// so the extractor can fall back instead of the call failing.
pub(crate) async fn send_json(
    request: RequestBuilder,
    provider: &str,
    credential: &str,
    timeout_seconds: u64,
) -> Result<Value> {
    let resp = request
        .bearer_auth(credential)
        .timeout(Duration::from_secs(timeout_seconds))
        .send()
        .await
        .map_err(|e| AssistError::Transport(format!("{} API call failed: {}", provider, e)))?;

    let status = resp.status();
    let resp_text = resp.text().await.map_err(|e| {
        AssistError::Transport(format!("Failed to read {} response: {}", provider, e))
    })?;

    if !status.is_success() {
        return Err(AssistError::UpstreamStatus {
            code: status.as_u16(),
            body: resp_text,
        });
    }

    debug!(provider, status = status.as_u16(), bytes = resp_text.len(), "provider answered");

    Ok(serde_json::from_str(&resp_text).unwrap_or(Value::String(resp_text)))
}
