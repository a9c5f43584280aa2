//! Settings backend selection

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{FileSystemSettings, MemorySettings, RepositoryResult, SettingsRepository};

/// Where persisted settings live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSource {
    /// YAML file on disk
    File,
    /// Process memory only; changes are lost on restart
    #[default]
    Memory,
}

/// Settings backend configuration
///
/// ```rust
/// use preproc_repository::{SettingsConfig, SettingsSource};
///
/// let config = SettingsConfig::file("config/assistant.yaml");
/// assert_eq!(config.source, SettingsSource::File);
///
/// let config = SettingsConfig::memory();
/// assert!(config.path.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub source: SettingsSource,

    /// Settings file (required for the file source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SettingsConfig {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            source: SettingsSource::File,
            path: Some(path.into()),
        }
    }

    pub fn memory() -> Self {
        Self {
            source: SettingsSource::Memory,
            path: None,
        }
    }

    /// File source when a path is given, memory otherwise
    pub fn from_optional_path(path: Option<String>) -> Self {
        match path.filter(|p| !p.trim().is_empty()) {
            Some(path) => Self::file(path),
            None => Self::memory(),
        }
    }

    /// Open the configured backend
    pub fn open(&self) -> RepositoryResult<Arc<dyn SettingsRepository>> {
        match (self.source, &self.path) {
            (SettingsSource::File, Some(path)) => Ok(Arc::new(FileSystemSettings::new(path)?)),
            (SettingsSource::File, None) => Err(crate::RepositoryError::InvalidPath {
                path: Default::default(),
            }),
            (SettingsSource::Memory, _) => Ok(Arc::new(MemorySettings::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_optional_path() {
        assert_eq!(
            SettingsConfig::from_optional_path(Some("a.yaml".to_string())).source,
            SettingsSource::File
        );
        assert_eq!(
            SettingsConfig::from_optional_path(Some("  ".to_string())).source,
            SettingsSource::Memory
        );
        assert_eq!(SettingsConfig::from_optional_path(None).source, SettingsSource::Memory);
    }

    #[test]
    fn test_open_backends() {
        assert_eq!(SettingsConfig::memory().open().unwrap().name(), "memory");
        assert_eq!(SettingsConfig::file("settings.yaml").open().unwrap().name(), "file");

        let missing_path = SettingsConfig {
            source: SettingsSource::File,
            path: None,
        };
        assert!(missing_path.open().is_err());
    }
}
