//! Example: Suggest preprocessing steps from a free-text request
//!
//! The provider is chosen through environment variables; without any, the
//! keyword heuristic (`mock`) answers and no network access is needed.
//!
//! Run with:
//! ```bash
//! export PREPROC_PROVIDER=openai   # openai | anthropic | mock | local
//! export PREPROC_API_KEY=your-api-key
//! export PREPROC_MODEL=gpt-4o-mini  # optional
//! cargo run --example generate_steps -- "Extract the value from JSON and convert bytes to MB"
//! ```

use preproc_core::{GenerationRequest, ProviderConfig, ProviderKind, StepCatalog, ValueType};
use preproc_llm::{preview_steps, GenerationOrchestrator};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Preprocessing Step Assistant ===\n");

    let provider: ProviderKind = env::var("PREPROC_PROVIDER")
        .unwrap_or_else(|_| "mock".to_string())
        .parse()?;

    let mut config = ProviderConfig::new(provider)
        .with_credential(env::var("PREPROC_API_KEY").unwrap_or_default());
    if let Ok(model) = env::var("PREPROC_MODEL") {
        config = config.with_model(model);
    }
    config.validate()?;

    let prompt = env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let prompt = if prompt.trim().is_empty() {
        "Extract the value from the JSON response and discard unchanged values".to_string()
    } else {
        prompt
    };

    let request = GenerationRequest::new(prompt)
        .with_sample_value(r#"{"data": {"value": 1048576}}"#)
        .with_value_type(ValueType::Numeric);

    println!("Provider: {}", config.provider);
    println!("Request:  {}\n", request.prompt);

    let orchestrator = GenerationOrchestrator::with_defaults();
    let steps = orchestrator.generate(&request, &config).await?;

    let preview = preview_steps(&request.sample_value, &steps, &StepCatalog::standard());
    println!("Input: {}", preview.input);
    for line in &preview.steps {
        println!("  {}", line);
    }

    println!("\nWire format:");
    println!("{}", serde_json::to_string_pretty(&steps)?);

    Ok(())
}
