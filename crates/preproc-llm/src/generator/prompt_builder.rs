//! Prompt construction for step generation

use preproc_core::{StepCatalog, ValueType, PROMPT_MAX_STEPS};

/// System prompt template
///
/// Placeholders: `{catalog}`, `{preferred}`, `{value_type}`, `{max_steps}`.
pub const STEP_GENERATION_PROMPT: &str = r#"You are a monitoring expert who configures item value preprocessing. Translate the user's request into an ordered list of preprocessing steps.

Available preprocessing steps (JSON, "id" is the step type):
{catalog}

Prefer these steps when they fit:
{preferred}

The monitored value is of type: {value_type}

Output format:
A JSON array of step objects, for example
[{"type": "JSONPath", "type_value": 17, "params": "$.data.value", "on_fail": true, "description": "Extract the value"}]

Requirements:
1. Respond with the JSON array only, no markdown code blocks, no explanations
2. "type_value" must be one of the ids listed above
3. "params" is a string; use "" when the step takes no parameters
4. Set "on_fail" to true when the step should carry a custom error handler
5. Keep "description" to one short sentence
6. Use at most {max_steps} steps
"#;

/// Builds system and user prompts from the step catalog
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    catalog: StepCatalog,
}

impl PromptBuilder {
    pub fn new(catalog: StepCatalog) -> Self {
        Self { catalog }
    }

    /// Instructions, catalog and output contract for the requested value type
    pub fn build_system_prompt(&self, value_type: ValueType) -> String {
        let catalog = serde_json::to_string(self.catalog.entries())
            .unwrap_or_else(|_| "[]".to_string());

        let preferred = self
            .catalog
            .ai_suggested()
            .map(|entry| {
                format!(
                    "- {} (id {}): {}",
                    entry.name,
                    entry.id,
                    entry.description.unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        STEP_GENERATION_PROMPT
            .replace("{catalog}", &catalog)
            .replace("{preferred}", &preferred)
            .replace("{value_type}", value_type.label())
            .replace("{max_steps}", &PROMPT_MAX_STEPS.to_string())
    }

    /// Request text plus the sample value when one is given
    pub fn build_user_prompt(&self, prompt: &str, sample_value: &str) -> String {
        let mut user_prompt = format!("Request: {}", prompt.trim());
        if !sample_value.trim().is_empty() {
            user_prompt.push_str("\n\nSample value:\n");
            user_prompt.push_str(sample_value);
        }
        user_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_contains_catalog_and_contract() {
        let prompt = PromptBuilder::default().build_system_prompt(ValueType::Json);

        assert!(prompt.contains(r#"{"id":17,"name":"JSONPath""#));
        assert!(prompt.contains(r#"{"id":31,"name":"SNMP walk value"}"#));
        assert!(prompt.contains("- Trim (id 12)"));
        assert!(prompt.contains("type: JSON"));
        assert!(prompt.contains("at most 5 steps"));
        assert!(!prompt.contains("{catalog}"));
        assert!(!prompt.contains("{max_steps}"));
    }

    #[test]
    fn test_user_prompt_without_sample() {
        let builder = PromptBuilder::default();
        assert_eq!(
            builder.build_user_prompt(" extract the number ", "  "),
            "Request: extract the number"
        );
    }

    #[test]
    fn test_user_prompt_with_sample() {
        let builder = PromptBuilder::default();
        let prompt = builder.build_user_prompt("get value", "{\"data\": 1}");
        assert_eq!(prompt, "Request: get value\n\nSample value:\n{\"data\": 1}");
        assert_eq!(prompt, builder.build_user_prompt("get value", "{\"data\": 1}"));
    }
}
