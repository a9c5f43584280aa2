//! Structural validation of step lists
//!
//! Validation works on raw JSON so that malformed model output (for example a
//! non-numeric `type_value`) can be reported instead of failing to parse.
//! Only structure is checked; the id does not have to exist in the catalog.

use crate::step::{type_id_from_value, StepSuggestion};
use serde::Serialize;
use serde_json::Value;

/// Result of validating a step list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    /// One message per problem, prefixed with the 1-based step position
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }
}

/// Validate raw step objects
pub fn validate_steps(steps: &[Value]) -> ValidationReport {
    let mut errors = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        let position = index + 1;
        let Some(object) = step.as_object() else {
            errors.push(format!("Step {}: expected an object", position));
            continue;
        };

        match object.get("type_value").or_else(|| object.get("typeId")) {
            None => errors.push(format!("Step {}: missing type_value", position)),
            Some(value) if type_id_from_value(value).is_none() => {
                errors.push(format!("Step {}: type_value must be numeric", position))
            }
            Some(_) => {}
        }

        if !object.contains_key("params") {
            errors.push(format!("Step {}: missing params", position));
        }
    }

    ValidationReport::from_errors(errors)
}

/// Validate typed suggestions through their wire form
pub fn validate_suggestions(steps: &[StepSuggestion]) -> ValidationReport {
    let values: Vec<Value> = steps
        .iter()
        .map(|step| serde_json::to_value(step).unwrap_or(Value::Null))
        .collect();
    validate_steps(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_well_formed_list_with_empty_params() {
        let steps = vec![
            json!({"type": "Trim", "type_value": 12, "params": "", "on_fail": false}),
            json!({"type": "Regular expression", "type_value": 11, "params": "([0-9]+)", "on_fail": true}),
        ];
        let report = validate_steps(&steps);
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_rejects_non_numeric_type_id_with_position() {
        let steps = vec![
            json!({"type": "Trim", "type_value": 12, "params": ""}),
            json!({"type": "JSONPath", "type_value": "jsonpath", "params": "$.a"}),
        ];
        let report = validate_steps(&steps);
        assert!(!report.ok);
        assert_eq!(report.errors, vec!["Step 2: type_value must be numeric".to_string()]);
    }

    #[test]
    fn test_missing_fields() {
        let steps = vec![json!({"type": "Trim"})];
        let report = validate_steps(&steps);
        assert!(!report.ok);
        assert_eq!(
            report.errors,
            vec![
                "Step 1: missing type_value".to_string(),
                "Step 1: missing params".to_string()
            ]
        );
    }

    #[test]
    fn test_non_object_entry() {
        let report = validate_steps(&[json!("Trim")]);
        assert_eq!(report.errors, vec!["Step 1: expected an object".to_string()]);
    }

    #[test]
    fn test_camel_case_type_id_accepted() {
        let report = validate_steps(&[json!({"typeId": "17", "params": "$.x"})]);
        assert!(report.ok);
    }

    #[test]
    fn test_both_key_spellings_agree_with_parser() {
        let steps = vec![
            json!({"type_value": 17, "typeId": 17, "params": "$.a", "on_fail": true, "onFail": true}),
            json!({"type_value": 12, "typeId": "x", "params": ""}),
            json!({"type_value": null, "typeId": 12, "params": ""}),
        ];
        let report = validate_steps(&steps);
        assert_eq!(report.errors, vec!["Step 3: type_value must be numeric".to_string()]);

        for (index, step) in steps.iter().enumerate() {
            let parsed = StepSuggestion::from_value(step).is_some();
            let flagged = report
                .errors
                .iter()
                .any(|e| e.starts_with(&format!("Step {}:", index + 1)));
            assert_eq!(parsed, !flagged, "step {}", index + 1);
        }
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_steps(&[]).ok);
    }

    #[test]
    fn test_typed_suggestions() {
        let steps = vec![StepSuggestion::new("Trim", 12, "")];
        assert!(validate_suggestions(&steps).ok);
    }
}
