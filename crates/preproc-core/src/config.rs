//! Provider configuration
//!
//! [`ProviderConfig`] is always handled as a whole value: updates go through
//! [`ConfigUpdate::apply_to`], which produces a fully validated replacement or
//! an error, never a partially modified config.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend used to turn a request into steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Mock,
    Local,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Mock => "mock",
            ProviderKind::Local => "local",
        }
    }

    /// Providers answered by the keyword heuristic instead of a network call.
    /// `Local` is served this way until a local backend exists.
    pub fn is_heuristic(&self) -> bool {
        matches!(self, ProviderKind::Mock | ProviderKind::Local)
    }

    pub fn requires_credential(&self) -> bool {
        !matches!(self, ProviderKind::Mock)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "mock" => Ok(ProviderKind::Mock),
            "local" => Ok(ProviderKind::Local),
            _ => Err(CoreError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Provider settings used for a generation call
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    /// Secret; never printed
    pub credential: String,
    pub model: String,
    /// Sampling temperature in [0, 1]
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
    pub enabled: bool,
    pub debug: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock,
            credential: String::new(),
            model: "gpt-4".to_string(),
            temperature: 0.3,
            max_tokens: 1000,
            timeout_seconds: 30,
            enabled: true,
            debug: false,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("credential", &self.masked_credential())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("enabled", &self.enabled)
            .field("debug", &self.debug)
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            ..Default::default()
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = credential.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }

    /// Credential as shown to administrators: empty, or fully masked
    pub fn masked_credential(&self) -> String {
        if self.has_credential() {
            "********".to_string()
        } else {
            String::new()
        }
    }

    /// Check every field invariant
    pub fn validate(&self) -> Result<()> {
        if self.temperature.is_nan() || !(0.0..=1.0).contains(&self.temperature) {
            return Err(CoreError::invalid(
                "temperature",
                format!("must be within [0, 1], got {}", self.temperature),
            ));
        }
        if self.max_tokens == 0 {
            return Err(CoreError::invalid("max_tokens", "must be greater than 0"));
        }
        if self.timeout_seconds == 0 {
            return Err(CoreError::invalid("timeout_seconds", "must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(CoreError::invalid("model", "must not be empty"));
        }
        Ok(())
    }
}

/// Administrative change request; unset fields keep their current value
#[derive(Clone, Default, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default, alias = "api_key")]
    pub credential: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub debug: Option<bool>,
}

impl fmt::Debug for ConfigUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigUpdate")
            .field("provider", &self.provider)
            .field("credential", &self.credential.as_ref().map(|_| "********"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("enabled", &self.enabled)
            .field("debug", &self.debug)
            .finish()
    }
}

impl ConfigUpdate {
    /// Build the replacement config. Either every field validates and a new
    /// config is returned, or nothing is applied.
    pub fn apply_to(&self, current: &ProviderConfig) -> Result<ProviderConfig> {
        let mut next = current.clone();

        if let Some(provider) = &self.provider {
            next.provider = provider.parse()?;
        }
        if let Some(credential) = &self.credential {
            next.credential = credential.trim().to_string();
        }
        if let Some(model) = &self.model {
            next.model = model.trim().to_string();
        }
        if let Some(temperature) = self.temperature {
            next.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            next.max_tokens = max_tokens;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            next.timeout_seconds = timeout_seconds;
        }
        if let Some(enabled) = self.enabled {
            next.enabled = enabled;
        }
        if let Some(debug) = self.debug {
            next.debug = debug;
        }

        next.validate()?;
        Ok(next)
    }
}
