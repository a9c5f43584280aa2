//! Keyword heuristic used by the `mock` provider and as the fallback
//!
//! Deterministic and total: every input produces at least one step.

use preproc_core::catalog::step_type;
use preproc_core::{GenerationRequest, StepSuggestion, ValueType};

/// Trigger keywords and the step each one adds
struct Rule {
    keywords: &'static [&'static str],
    /// Also fires when the sample value contains `{`
    sample_brace: bool,
    name: &'static str,
    type_id: i64,
    params: &'static str,
    on_fail: bool,
    description: &'static str,
}

// Order here is the output order.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["json"],
        sample_brace: true,
        name: "JSONPath",
        type_id: step_type::JSONPATH,
        params: "$.data.value",
        on_fail: true,
        description: "Extract the value field from the JSON document",
    },
    Rule {
        keywords: &["regex", "pattern"],
        sample_brace: false,
        name: "Regular expression",
        type_id: step_type::REGEX,
        params: r"([0-9]+\.[0-9]+)",
        on_fail: true,
        description: "Capture the first decimal number",
    },
    Rule {
        keywords: &["convert", "bytes"],
        sample_brace: false,
        name: "Custom multiplier",
        type_id: step_type::MULTIPLIER,
        params: "0.000001",
        on_fail: false,
        description: "Convert bytes to megabytes",
    },
    Rule {
        keywords: &["error", "fail"],
        sample_brace: false,
        name: "Custom on fail (zero on error)",
        type_id: step_type::CUSTOM_ON_FAIL,
        params: "0",
        on_fail: true,
        description: "Set the value to 0 when preprocessing fails",
    },
    Rule {
        keywords: &["discard", "unchanged"],
        sample_brace: false,
        name: "Discard unchanged with heartbeat",
        type_id: step_type::DISCARD_UNCHANGED_HEARTBEAT,
        params: "3600",
        on_fail: true,
        description: "Keep only changed values, at least once per hour",
    },
];

impl Rule {
    fn matches(&self, prompt: &str, sample_value: &str) -> bool {
        self.keywords.iter().any(|k| prompt.contains(k))
            || (self.sample_brace && sample_value.contains('{'))
    }

    fn step(&self) -> StepSuggestion {
        StepSuggestion::new(self.name, self.type_id, self.params)
            .with_on_fail(self.on_fail)
            .with_description(self.description)
    }
}

/// Suggest steps from keywords in the prompt and the shape of the sample.
///
/// `value_type` does not influence the result; it is accepted so callers can
/// pass a request through unchanged.
pub fn generate(prompt: &str, sample_value: &str, _value_type: ValueType) -> Vec<StepSuggestion> {
    let prompt = prompt.to_lowercase();

    let steps: Vec<StepSuggestion> = RULES
        .iter()
        .filter(|rule| rule.matches(&prompt, sample_value))
        .map(Rule::step)
        .collect();

    if steps.is_empty() {
        default_steps()
    } else {
        steps
    }
}

/// [`generate`] for a whole request
pub fn generate_for(request: &GenerationRequest) -> Vec<StepSuggestion> {
    generate(&request.prompt, &request.sample_value, request.value_type)
}

/// Generic pair returned when nothing in the request matched
pub fn default_steps() -> Vec<StepSuggestion> {
    vec![
        StepSuggestion::new("Trim", step_type::TRIM, "")
            .with_description("Remove surrounding whitespace"),
        StepSuggestion::new("Regular expression", step_type::REGEX, "([0-9]+)")
            .with_on_fail(true)
            .with_description("Capture the first integer"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use preproc_core::validate_suggestions;

    fn ids(steps: &[StepSuggestion]) -> Vec<i64> {
        steps.iter().map(|s| s.type_id).collect()
    }

    #[test]
    fn test_no_trigger_yields_default_pair() {
        let steps = generate("hello world", "", ValueType::Numeric);
        assert_eq!(ids(&steps), vec![12, 11]);
        assert_eq!(steps[0].params, "");
        assert!(!steps[0].on_fail);
        assert_eq!(steps[1].params, "([0-9]+)");
        assert!(steps[1].on_fail);
    }

    #[test]
    fn test_json_and_convert_in_rule_order() {
        let steps = generate("convert bytes to json", "{\"a\":1}", ValueType::Numeric);
        assert_eq!(ids(&steps), vec![17, 13]);
        assert_eq!(steps[0].params, "$.data.value");
        assert_eq!(steps[1].params, "0.000001");
    }

    #[test]
    fn test_sample_brace_triggers_jsonpath() {
        let steps = generate("get the value", "{\"data\":{\"value\":3}}", ValueType::Text);
        assert_eq!(ids(&steps), vec![17]);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let steps = generate("Use a REGEX, discard UNCHANGED, zero on Error", "", ValueType::Numeric);
        assert_eq!(ids(&steps), vec![11, 0, 20]);
        assert_eq!(steps[0].params, r"([0-9]+\.[0-9]+)");
        assert_eq!(steps[1].type_name, "Custom on fail (zero on error)");
        assert_eq!(steps[2].params, "3600");
    }

    #[test]
    fn test_all_rules_fire_once() {
        let steps = generate(
            "json pattern convert error discard regex bytes fail unchanged",
            "",
            ValueType::Numeric,
        );
        assert_eq!(ids(&steps), vec![17, 11, 13, 0, 20]);
    }

    #[test]
    fn test_deterministic() {
        let a = generate("convert bytes", "", ValueType::Numeric);
        let b = generate("convert bytes", "", ValueType::Numeric);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_step_has_description() {
        for prompt in ["", "json", "regex", "convert", "error", "discard"] {
            for step in generate(prompt, "", ValueType::Numeric) {
                assert!(step.description.is_some(), "{prompt}: {step:?}");
            }
        }
    }

    #[test]
    fn test_outputs_pass_validator() {
        for prompt in ["", "hello", "json regex", "convert error discard"] {
            let steps = generate(prompt, "{", ValueType::Log);
            assert!(validate_suggestions(&steps).ok);
        }
    }

    #[test]
    fn test_generate_for_request() {
        let req = GenerationRequest::new("discard duplicates").with_value_type(ValueType::Unsigned);
        assert_eq!(ids(&generate_for(&req)), vec![20]);
    }
}
