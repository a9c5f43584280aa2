//! Preproc Core - shared types for the AI preprocessing assistant
//!
//! This crate provides the data model every other crate builds on:
//! - The fixed preprocessing step catalog
//! - Step suggestions and their stable wire shape
//! - Generation requests and value types
//! - Provider configuration and caller roles
//! - Structural step validation

pub mod catalog;
pub mod config;
pub mod error;
pub mod injector;
pub mod request;
pub mod role;
pub mod step;
pub mod validation;

// Re-export commonly used types
pub use catalog::{CatalogEntry, StepCatalog, CATALOG_VERSION};
pub use config::{ConfigUpdate, ProviderConfig, ProviderKind};
pub use error::{CoreError, Result};
pub use injector::{apply_suggestions, FormInjector};
pub use request::{GenerationRequest, ValueType};
pub use role::UserRole;
pub use step::{StepSuggestion, MAX_STEPS, PROMPT_MAX_STEPS};
pub use validation::{validate_steps, validate_suggestions, ValidationReport};
