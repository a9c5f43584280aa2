//! Storage seam for persisted settings

use async_trait::async_trait;
use std::collections::HashMap;

use crate::RepositoryResult;

/// Flat key/value settings as they are persisted
pub type SettingsMap = HashMap<String, String>;

/// Backend holding the persisted settings map
///
/// Implementations store and return the whole map at once. A backend that
/// has never been written returns an empty map.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read every stored setting
    async fn load_all(&self) -> RepositoryResult<SettingsMap>;

    /// Replace the stored settings with `settings`
    async fn save_all(&self, settings: &SettingsMap) -> RepositoryResult<()>;

    /// Short backend name for logs
    fn name(&self) -> &str;
}
