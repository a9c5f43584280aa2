//! Settings storage for the preprocessing assistant
//!
//! Provider settings are persisted as a flat map of string keys to string
//! values (`ai_provider`, `ai_model`, ...). This crate provides:
//!
//! - **[`SettingsRepository`]**: the storage seam, with a YAML file backend
//!   and an in-memory backend
//! - **[`ConfigStore`]**: the live provider configuration, published as
//!   immutable snapshots and replaced wholesale by administrators
//!
//! # Quick Start
//!
//! ```no_run
//! use preproc_core::{ConfigUpdate, UserRole};
//! use preproc_repository::{ConfigStore, FileSystemSettings};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Arc::new(FileSystemSettings::new("config/assistant.yaml")?);
//!     let store = ConfigStore::load(settings).await?;
//!
//!     let update = ConfigUpdate {
//!         provider: Some("openai".to_string()),
//!         credential: Some("sk-...".to_string()),
//!         ..Default::default()
//!     };
//!     store.update(UserRole::SuperAdmin, update).await?;
//!
//!     println!("provider: {}", store.snapshot().await.provider);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod file_system;
pub mod memory;
pub mod settings;
pub mod store;
pub mod traits;

// Re-exports - Configuration
pub use config::{SettingsConfig, SettingsSource};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use file_system::FileSystemSettings;
pub use memory::MemorySettings;
pub use store::ConfigStore;
pub use traits::{SettingsMap, SettingsRepository};
