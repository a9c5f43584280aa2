//! Server configuration

use preproc_repository::SettingsConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Level for this workspace's crates when `RUST_LOG` is not set
    pub log_level: String,

    /// YAML file holding the provider settings; in memory when unset
    pub settings_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            settings_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and `config/server`
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from("config/server")
    }

    /// Load from `path` (extension optional) overlaid with `PREPROC_*` variables
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let name = path.as_ref().to_string_lossy().into_owned();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name(&name).required(false))
            .add_source(config::Environment::with_prefix("PREPROC"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable config file ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Backend for the persisted provider settings
    pub fn settings(&self) -> SettingsConfig {
        SettingsConfig::from_optional_path(self.settings_path.clone())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!(
            "preproc_server={0},preproc_llm={0},preproc_repository={0},tower_http=debug",
            self.log_level
        )
    }
}
