//! Error types for Preproc Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Invalid value type: {0}")]
    InvalidValueType(String),

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Invalid steps: {}", .0.join("; "))]
    InvalidSteps(Vec<String>),

    #[error("Step injection failed: {0}")]
    Injection(String),
}

impl CoreError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = CoreError::invalid("temperature", "must be within [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: temperature: must be within [0, 1]"
        );
    }

    #[test]
    fn test_invalid_steps_display_joins_messages() {
        let err = CoreError::InvalidSteps(vec![
            "Step 1: missing params".to_string(),
            "Step 3: type_value must be numeric".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid steps: Step 1: missing params; Step 3: type_value must be numeric"
        );
    }
}
