//! Step generation from natural language requests
//!
//! - [`GenerationOrchestrator`]: provider dispatch with heuristic fallback
//! - [`PromptBuilder`]: system and user prompts built from the step catalog
//! - [`extract`]: lenient parsing of the step array out of a completion
//! - [`heuristic`]: deterministic keyword rules, used for `mock` and as fallback
//!
//! # Example
//! ```no_run
//! use preproc_core::{GenerationRequest, ProviderConfig, ProviderKind};
//! use preproc_llm::GenerationOrchestrator;
//!
//! # async fn example() -> preproc_llm::Result<()> {
//! let orchestrator = GenerationOrchestrator::with_defaults();
//! let config = ProviderConfig::new(ProviderKind::OpenAI).with_credential("your-api-key");
//! let request = GenerationRequest::new("Extract the temperature from the JSON body")
//!     .with_sample_value(r#"{"data": {"value": 21.5}}"#);
//!
//! for step in orchestrator.generate(&request, &config).await? {
//!     println!("{} ({}): {}", step.type_name, step.type_id, step.params);
//! }
//! # Ok(())
//! # }
//! ```

pub mod heuristic;
pub mod orchestrator;
pub mod presets;
pub mod preview;
pub mod prompt_builder;
pub mod response_extractor;

// Re-export main types
pub use orchestrator::GenerationOrchestrator;
pub use presets::{PromptPreset, DEFAULT_PROMPTS};
pub use preview::{preview_steps, StepPreview};
pub use prompt_builder::PromptBuilder;
pub use response_extractor::{extract, extract_step_objects};
