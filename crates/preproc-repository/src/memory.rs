//! In-memory settings, for tests and ephemeral deployments

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{RepositoryResult, SettingsMap, SettingsRepository};

#[derive(Default)]
pub struct MemorySettings {
    settings: RwLock<SettingsMap>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given settings already stored
    pub fn with_settings<I, K, V>(settings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            settings: RwLock::new(
                settings
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn load_all(&self) -> RepositoryResult<SettingsMap> {
        Ok(self.settings.read().await.clone())
    }

    async fn save_all(&self, settings: &SettingsMap) -> RepositoryResult<()> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
