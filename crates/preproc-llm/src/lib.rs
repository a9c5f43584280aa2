//! Preproc LLM Integration
//!
//! Turns a free-text preprocessing request into an ordered list of step
//! suggestions:
//! - Provider dispatch: OpenAI- and Anthropic-shaped endpoints, plus a
//!   deterministic keyword heuristic for `mock`/`local`
//! - Prompt construction from the fixed step catalog
//! - Lenient extraction of the JSON step array from model output
//! - Silent fallback to the heuristic when a model answers with something unusable
//!
//! **Note**: transport failures are never hidden. A provider that cannot be
//! reached, or answers with an error status, is reported to the caller.

// Re-export core types
pub use client::{ProviderClient, ResponseShape};
pub use error::{AssistError, Result};

// Re-export providers
pub use provider::{AnthropicProvider, OpenAIProvider, ProviderRegistry};

// Re-export generators
pub use generator::{
    extract, extract_step_objects, preview_steps, GenerationOrchestrator, PromptBuilder,
    PromptPreset, StepPreview, DEFAULT_PROMPTS,
};

pub mod client;
pub mod error;
pub mod generator;
pub mod provider;
