//! Step suggestions
//!
//! A [`StepSuggestion`] is one suggested preprocessing step. Its serialized
//! form is a stable contract with the form-filling collaborator:
//!
//! ```json
//! {"type": "JSONPath", "type_value": 17, "params": "$.data.value", "on_fail": true, "description": "..."}
//! ```
//!
//! Model output is parsed leniently: `typeId`/`onFail` are accepted as aliases,
//! numeric strings are accepted as ids, and scalar params are stringified.
//! When an object carries both spellings, the wire key wins and the alias is
//! ignored, matching [`crate::validation::validate_steps`].

use crate::catalog::StepCatalog;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Upper bound on the number of steps handed to a caller
pub const MAX_STEPS: usize = 10;

/// Number of steps a model is asked to stay within
pub const PROMPT_MAX_STEPS: usize = 5;

/// One suggested preprocessing step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStep")]
pub struct StepSuggestion {
    /// Human-readable step name (display only)
    #[serde(rename = "type")]
    pub type_name: String,

    /// Catalog key
    #[serde(rename = "type_value")]
    pub type_id: i64,

    /// Opaque parameter payload, may be empty
    pub params: String,

    /// Attach a custom-on-fail error handler
    pub on_fail: bool,

    /// Optional rationale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StepSuggestion {
    pub fn new(type_name: impl Into<String>, type_id: i64, params: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            type_id,
            params: params.into(),
            on_fail: false,
            description: None,
        }
    }

    pub fn with_on_fail(mut self, on_fail: bool) -> Self {
        self.on_fail = on_fail;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert a raw JSON object (typically model output) into a suggestion
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// One-line rendering: catalog name, params and an on-fail marker.
    /// Ids outside the catalog render as `Unknown`.
    pub fn display_line(&self, catalog: &StepCatalog) -> String {
        let name = catalog.name_of(self.type_id).unwrap_or("Unknown");
        let mut line = format!("{}: {}", name, self.params);
        if self.on_fail {
            line.push_str(" [on fail]");
        }
        line
    }
}

/// Read a step type id from a JSON value.
///
/// Accepts integers, integral floats and strings holding an integer.
pub fn type_id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Incoming step object with both key spellings kept apart
#[derive(Deserialize)]
struct RawStep {
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default, deserialize_with = "present")]
    type_value: Option<Value>,
    #[serde(rename = "typeId", default, deserialize_with = "present")]
    type_id_alias: Option<Value>,
    #[serde(default)]
    params: Value,
    #[serde(default)]
    on_fail: Option<bool>,
    #[serde(rename = "onFail", default)]
    on_fail_alias: Option<bool>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawStep> for StepSuggestion {
    type Error = String;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let id_value = raw
            .type_value
            .or(raw.type_id_alias)
            .ok_or_else(|| "missing type_value".to_string())?;
        let type_id = type_id_from_value(&id_value)
            .ok_or_else(|| format!("type_value must be numeric, got {}", id_value))?;

        let params = match raw.params {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        };

        Ok(Self {
            type_name: raw.type_name,
            type_id,
            params,
            on_fail: raw.on_fail.or(raw.on_fail_alias).unwrap_or(false),
            description: raw.description,
        })
    }
}

// Keeps an explicit `null` distinct from an absent key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
