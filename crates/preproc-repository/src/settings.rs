//! Mapping between [`ProviderConfig`] and the persisted settings map

use preproc_core::ProviderConfig;
use std::str::FromStr;

use crate::{error::RepositoryError, RepositoryResult, SettingsMap};

pub const AI_PROVIDER: &str = "ai_provider";
pub const AI_API_KEY: &str = "ai_api_key";
pub const AI_MODEL: &str = "ai_model";
pub const AI_TEMPERATURE: &str = "ai_temperature";
pub const AI_MAX_TOKENS: &str = "ai_max_tokens";
pub const AI_TIMEOUT: &str = "ai_timeout";
pub const AI_ENABLED: &str = "ai_enabled";
pub const AI_DEBUG: &str = "ai_debug";

pub const ALL_KEYS: [&str; 8] = [
    AI_PROVIDER,
    AI_API_KEY,
    AI_MODEL,
    AI_TEMPERATURE,
    AI_MAX_TOKENS,
    AI_TIMEOUT,
    AI_ENABLED,
    AI_DEBUG,
];

/// Flatten a config into its persisted form
pub fn to_settings(config: &ProviderConfig) -> SettingsMap {
    [
        (AI_PROVIDER, config.provider.to_string()),
        (AI_API_KEY, config.credential.clone()),
        (AI_MODEL, config.model.clone()),
        (AI_TEMPERATURE, config.temperature.to_string()),
        (AI_MAX_TOKENS, config.max_tokens.to_string()),
        (AI_TIMEOUT, config.timeout_seconds.to_string()),
        (AI_ENABLED, config.enabled.to_string()),
        (AI_DEBUG, config.debug.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

/// Merge persisted settings over `defaults`
///
/// Absent keys, and empty values for keys other than the credential, keep the
/// default. Unknown keys are ignored. A value that does not parse fails the
/// whole load, as does a merged config that does not validate.
pub fn from_settings(
    settings: &SettingsMap,
    defaults: &ProviderConfig,
) -> RepositoryResult<ProviderConfig> {
    let mut config = defaults.clone();

    if let Some(value) = present(settings, AI_PROVIDER) {
        config.provider = parse(AI_PROVIDER, value)?;
    }
    if let Some(value) = settings.get(AI_API_KEY) {
        config.credential = value.trim().to_string();
    }
    if let Some(value) = present(settings, AI_MODEL) {
        config.model = value.to_string();
    }
    if let Some(value) = present(settings, AI_TEMPERATURE) {
        config.temperature = parse(AI_TEMPERATURE, value)?;
    }
    if let Some(value) = present(settings, AI_MAX_TOKENS) {
        config.max_tokens = parse(AI_MAX_TOKENS, value)?;
    }
    if let Some(value) = present(settings, AI_TIMEOUT) {
        config.timeout_seconds = parse(AI_TIMEOUT, value)?;
    }
    if let Some(value) = present(settings, AI_ENABLED) {
        config.enabled = parse_flag(AI_ENABLED, value)?;
    }
    if let Some(value) = present(settings, AI_DEBUG) {
        config.debug = parse_flag(AI_DEBUG, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn present<'a>(settings: &'a SettingsMap, key: &str) -> Option<&'a str> {
    settings
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn invalid(key: &str, value: &str) -> RepositoryError {
    RepositoryError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> RepositoryResult<T> {
    value.parse().map_err(|_| invalid(key, value))
}

/// Flags may be stored as `true`/`false` or `1`/`0`
fn parse_flag(key: &str, value: &str) -> RepositoryResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
