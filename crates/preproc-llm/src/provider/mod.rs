//! Provider implementations and the provider registry

use crate::client::ProviderClient;
use preproc_core::ProviderKind;
use std::collections::HashMap;
use std::sync::Arc;

mod anthropic;
mod openai;
mod transport;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;

/// Map from provider kind to the client serving it
///
/// `mock` and `local` never need an entry: the orchestrator answers them with
/// the keyword heuristic.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    clients: HashMap<ProviderKind, Arc<dyn ProviderClient>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the real OpenAI and Anthropic endpoints
    pub fn with_defaults() -> Self {
        Self::new()
            .register(ProviderKind::OpenAI, Arc::new(OpenAIProvider::new()))
            .register(ProviderKind::Anthropic, Arc::new(AnthropicProvider::new()))
    }

    /// Add or replace the client for `kind`
    pub fn register(mut self, kind: ProviderKind, client: Arc<dyn ProviderClient>) -> Self {
        self.insert(kind, client);
        self
    }

    pub fn insert(&mut self, kind: ProviderKind, client: Arc<dyn ProviderClient>) {
        self.clients.insert(kind, client);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn ProviderClient>> {
        self.clients.get(&kind).cloned()
    }

    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.clients.contains_key(&kind)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self
            .clients
            .iter()
            .map(|(kind, client)| format!("{}={}", kind, client.name()))
            .collect();
        names.sort();
        f.debug_struct("ProviderRegistry")
            .field("clients", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_remote_providers() {
        let registry = ProviderRegistry::with_defaults();
        assert!(registry.contains(ProviderKind::OpenAI));
        assert!(registry.contains(ProviderKind::Anthropic));
        assert!(!registry.contains(ProviderKind::Mock));
        assert!(!registry.contains(ProviderKind::Local));
        assert_eq!(registry.get(ProviderKind::OpenAI).unwrap().name(), "openai");
    }

    #[test]
    fn test_register_replaces_client() {
        let registry = ProviderRegistry::new()
            .register(ProviderKind::OpenAI, Arc::new(OpenAIProvider::new()))
            .register(
                ProviderKind::OpenAI,
                Arc::new(OpenAIProvider::with_base_url("http://localhost:11434/v1")),
            );
        assert!(registry.contains(ProviderKind::OpenAI));
        assert!(format!("{:?}", registry).contains("openai=openai"));
    }
}
