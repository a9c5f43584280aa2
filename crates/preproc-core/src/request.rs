//! Generation requests

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of the monitored value the steps will be applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Numeric,
    Unsigned,
    Text,
    Log,
    Json,
    Xml,
}

impl ValueType {
    pub const ALL: [ValueType; 6] = [
        ValueType::Numeric,
        ValueType::Unsigned,
        ValueType::Text,
        ValueType::Log,
        ValueType::Json,
        ValueType::Xml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Numeric => "numeric",
            ValueType::Unsigned => "unsigned",
            ValueType::Text => "text",
            ValueType::Log => "log",
            ValueType::Json => "json",
            ValueType::Xml => "xml",
        }
    }

    /// Label shown to users and models
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::Numeric => "Numeric (float)",
            ValueType::Unsigned => "Numeric (unsigned)",
            ValueType::Text => "Text",
            ValueType::Log => "Log",
            ValueType::Json => "JSON",
            ValueType::Xml => "XML",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ValueType::ALL
            .into_iter()
            .find(|vt| vt.as_str() == wanted)
            .ok_or_else(|| CoreError::InvalidValueType(s.to_string()))
    }
}

/// A request to turn free text into preprocessing steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// What the user wants to achieve (required)
    pub prompt: String,

    /// Optional sample of the monitored value
    #[serde(default, alias = "item_value")]
    pub sample_value: String,

    #[serde(default)]
    pub value_type: ValueType,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            sample_value: String::new(),
            value_type: ValueType::default(),
        }
    }

    pub fn with_sample_value(mut self, sample_value: impl Into<String>) -> Self {
        self.sample_value = sample_value.into();
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// True when the prompt is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.prompt.trim().is_empty()
    }
}
