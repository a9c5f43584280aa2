//! Live provider configuration
//!
//! Readers take an `Arc` snapshot and keep using it for the whole request.
//! Writers are serialized; each update validates the full replacement,
//! persists it, and only then publishes it by swapping the `Arc`.

use preproc_core::{ConfigUpdate, ProviderConfig, UserRole};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::error::RepositoryError;
use crate::settings::{from_settings, to_settings};
use crate::{RepositoryResult, SettingsRepository};

pub struct ConfigStore {
    repository: Arc<dyn SettingsRepository>,
    defaults: ProviderConfig,
    current: RwLock<Arc<ProviderConfig>>,
    writer: Mutex<()>,
}

impl ConfigStore {
    /// Load persisted settings merged over the compiled-in defaults
    pub async fn load(repository: Arc<dyn SettingsRepository>) -> RepositoryResult<Self> {
        Self::load_with_defaults(repository, ProviderConfig::default()).await
    }

    pub async fn load_with_defaults(
        repository: Arc<dyn SettingsRepository>,
        defaults: ProviderConfig,
    ) -> RepositoryResult<Self> {
        let settings = repository.load_all().await?;
        let config = from_settings(&settings, &defaults)?;

        info!(
            backend = repository.name(),
            provider = %config.provider,
            model = %config.model,
            enabled = config.enabled,
            "provider configuration loaded"
        );

        Ok(Self {
            repository,
            defaults,
            current: RwLock::new(Arc::new(config)),
            writer: Mutex::new(()),
        })
    }

    /// Current configuration
    pub async fn snapshot(&self) -> Arc<ProviderConfig> {
        self.current.read().await.clone()
    }

    /// Apply an administrative change
    ///
    /// # Errors
    /// * `Forbidden` - caller is not a super administrator
    /// * `Config` - a field is invalid; nothing is changed
    /// * `Io` / `YamlParse` - persisting failed; the live config is unchanged
    pub async fn update(
        &self,
        role: UserRole,
        update: ConfigUpdate,
    ) -> RepositoryResult<Arc<ProviderConfig>> {
        if !role.can_manage_config() {
            return Err(RepositoryError::Forbidden(
                "changing the assistant configuration requires super administrator access"
                    .to_string(),
            ));
        }

        let _guard = self.writer.lock().await;

        let current = self.snapshot().await;
        let next = Arc::new(update.apply_to(&current)?);

        self.repository.save_all(&to_settings(&next)).await?;
        *self.current.write().await = next.clone();

        info!(
            provider = %next.provider,
            model = %next.model,
            enabled = next.enabled,
            debug = next.debug,
            "provider configuration updated"
        );
        Ok(next)
    }

    /// Re-read the persisted settings and publish them
    pub async fn reload(&self) -> RepositoryResult<Arc<ProviderConfig>> {
        let _guard = self.writer.lock().await;

        let settings = self.repository.load_all().await?;
        let next = Arc::new(from_settings(&settings, &self.defaults)?);
        *self.current.write().await = next.clone();
        Ok(next)
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("repository", &self.repository.name())
            .finish_non_exhaustive()
    }
}
