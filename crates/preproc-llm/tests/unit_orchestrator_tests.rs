//! Orchestrator behavior with scripted provider clients

use async_trait::async_trait;
use preproc_core::{validate_suggestions, GenerationRequest, ProviderConfig, ProviderKind};
use preproc_llm::{
    AssistError, GenerationOrchestrator, OpenAIProvider, ProviderClient, ProviderRegistry,
    ResponseShape, Result,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Client that answers every call with a fixed outcome and counts calls
struct ScriptedClient {
    answer: std::result::Result<Value, (u16, &'static str)>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn completion(content: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(json!({"choices": [{"message": {"content": content}}]})),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(code: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            answer: Err((code, body)),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderClient for ScriptedClient {
    async fn call(&self, _system: &str, _user: &str, _config: &ProviderConfig) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Ok(value) => Ok(value.clone()),
            Err((code, body)) => Err(AssistError::UpstreamStatus {
                code: *code,
                body: body.to_string(),
            }),
        }
    }

    fn response_shape(&self) -> ResponseShape {
        ResponseShape::OpenAI
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Client that never answers within the deadline
struct StalledClient;

#[async_trait]
impl ProviderClient for StalledClient {
    async fn call(&self, _system: &str, _user: &str, _config: &ProviderConfig) -> Result<Value> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Value::Null)
    }

    fn response_shape(&self) -> ResponseShape {
        ResponseShape::OpenAI
    }

    fn name(&self) -> &str {
        "stalled"
    }
}

fn orchestrator_with(client: Arc<dyn ProviderClient>) -> GenerationOrchestrator {
    GenerationOrchestrator::new(ProviderRegistry::new().register(ProviderKind::OpenAI, client))
}

fn openai_config() -> ProviderConfig {
    ProviderConfig::new(ProviderKind::OpenAI).with_credential("sk-test")
}

fn ids(steps: &[preproc_core::StepSuggestion]) -> Vec<i64> {
    steps.iter().map(|s| s.type_id).collect()
}

#[tokio::test]
async fn test_missing_credential_rejected_before_any_call() {
    let client = ScriptedClient::completion("[]");
    let orchestrator = orchestrator_with(client.clone());

    let err = orchestrator
        .generate(
            &GenerationRequest::new("extract json"),
            &ProviderConfig::new(ProviderKind::OpenAI),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AssistError::NotConfigured(_)));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_model_steps_returned_when_valid() {
    let client = ScriptedClient::completion(
        r#"Sure! [{"type":"JSONPath","type_value":17,"params":"$.temp","on_fail":true,"description":"Read temp"}]"#,
    );
    let orchestrator = orchestrator_with(client.clone());

    let steps = orchestrator
        .generate(&GenerationRequest::new("get temperature"), &openai_config())
        .await
        .unwrap();

    assert_eq!(client.calls(), 1);
    assert_eq!(ids(&steps), vec![17]);
    assert_eq!(steps[0].params, "$.temp");
    assert_eq!(steps[0].description.as_deref(), Some("Read temp"));
}

#[tokio::test]
async fn test_unparsable_answer_falls_back_to_request_heuristic() {
    let client = ScriptedClient::completion("I would use a JSONPath step.");
    let orchestrator = orchestrator_with(client);

    let steps = orchestrator
        .generate(&GenerationRequest::new("convert bytes"), &openai_config())
        .await
        .unwrap();

    assert_eq!(ids(&steps), vec![13]);
}

#[tokio::test]
async fn test_invalid_steps_fall_back_to_request_heuristic() {
    let client = ScriptedClient::completion(r#"[{"type":"Trim","type_value":"trim"}]"#);
    let orchestrator = orchestrator_with(client);

    let steps = orchestrator
        .generate(&GenerationRequest::new("discard unchanged"), &openai_config())
        .await
        .unwrap();

    assert_eq!(ids(&steps), vec![20]);
}

#[tokio::test]
async fn test_empty_list_falls_back() {
    let client = ScriptedClient::completion("[]");
    let orchestrator = orchestrator_with(client);

    let steps = orchestrator
        .generate(&GenerationRequest::new("hello world"), &openai_config())
        .await
        .unwrap();

    assert_eq!(ids(&steps), vec![12, 11]);
}

#[tokio::test]
async fn test_upstream_error_is_not_masked() {
    let client = ScriptedClient::failing(500, "internal");
    let orchestrator = orchestrator_with(client);

    let err = orchestrator
        .generate(&GenerationRequest::new("extract json"), &openai_config())
        .await
        .unwrap_err();

    assert!(matches!(err, AssistError::UpstreamStatus { code: 500, .. }));
}

#[tokio::test(start_paused = true)]
async fn test_deadline_maps_to_transport_error() {
    let orchestrator = orchestrator_with(Arc::new(StalledClient));

    let err = orchestrator
        .generate(
            &GenerationRequest::new("extract json"),
            &openai_config().with_timeout_seconds(5),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AssistError::Transport(_)));
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(
            json!({"choices": [{"message": {"content":
                "[{\"type\":\"Trim\",\"type_value\":12,\"params\":\"\",\"on_fail\":false}]"}}]})
            .to_string(),
        )
        .create_async()
        .await;

    let orchestrator = orchestrator_with(Arc::new(OpenAIProvider::with_base_url(server.url())));
    let steps = orchestrator
        .generate(&GenerationRequest::new("trim it"), &openai_config())
        .await
        .unwrap();

    assert_eq!(ids(&steps), vec![12]);
}

#[tokio::test]
async fn test_mock_output_always_valid() {
    let orchestrator = GenerationOrchestrator::new(ProviderRegistry::new());
    for prompt in ["hello world", "convert bytes to json", "regex error", "discard"] {
        let steps = orchestrator
            .generate(&GenerationRequest::new(prompt), &ProviderConfig::default())
            .await
            .unwrap();
        assert!(!steps.is_empty());
        assert!(validate_suggestions(&steps).ok);
    }
}
