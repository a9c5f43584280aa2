//! YAML file backed settings

use async_trait::async_trait;
use path_absolutize::Absolutize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::{error::RepositoryError, RepositoryResult, SettingsMap, SettingsRepository};

/// Settings stored as a single YAML mapping on disk
///
/// ```yaml
/// ai_provider: openai
/// ai_model: gpt-4
/// ai_temperature: "0.3"
/// ```
///
/// Scalar values written by hand (numbers, booleans) are read as their text.
/// A missing file reads as an empty map; the file and its parent directory
/// are created on first save. The file holds the provider credential, so on
/// unix it is written owner-only (0600).
pub struct FileSystemSettings {
    path: PathBuf,
}

impl FileSystemSettings {
    /// Create a settings store at `path`
    ///
    /// # Example
    /// ```no_run
    /// use preproc_repository::FileSystemSettings;
    ///
    /// let settings = FileSystemSettings::new("config/assistant.yaml").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() || path.is_dir() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        Ok(Self { path: abs_path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Text form of a YAML scalar; `None` for nested values
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

#[async_trait]
impl SettingsRepository for FileSystemSettings {
    async fn load_all(&self) -> RepositoryResult<SettingsMap> {
        if !fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "settings file absent, using defaults");
            return Ok(SettingsMap::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(SettingsMap::new());
        }

        let raw: BTreeMap<String, Value> = serde_yaml::from_str(&content)?;
        raw.into_iter()
            .map(|(key, value)| match scalar_text(&value) {
                Some(text) => Ok((key, text)),
                None => Err(RepositoryError::InvalidSetting {
                    value: serde_yaml::to_string(&value)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                    key,
                }),
            })
            .collect()
    }

    async fn save_all(&self, settings: &SettingsMap) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Sorted keys keep the file diff-friendly
        let sorted: BTreeMap<&String, &String> = settings.iter().collect();
        let content = serde_yaml::to_string(&sorted)?;

        // Write then rename so readers never see a truncated file
        let tmp_path = self.path.with_extension("yaml.tmp");
        write_private(&tmp_path, content.as_bytes()).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), keys = settings.len(), "settings saved");
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Write `content` to `path`, readable by the owner only on unix
async fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;

    // `mode` only applies on creation; a leftover temp file keeps its bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .await?;
    }

    file.write_all(content).await?;
    file.sync_all().await
}
