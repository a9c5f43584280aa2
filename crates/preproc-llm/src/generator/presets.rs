//! Canned example requests offered to users

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptPreset {
    pub key: &'static str,
    pub prompt: &'static str,
}

pub const DEFAULT_PROMPTS: &[PromptPreset] = &[
    PromptPreset {
        key: "json_extract",
        prompt: "Extract numeric value from JSON response",
    },
    PromptPreset {
        key: "regex_match",
        prompt: "Extract number using regular expression",
    },
    PromptPreset {
        key: "unit_conversion",
        prompt: "Convert bytes to megabytes",
    },
    PromptPreset {
        key: "error_handling",
        prompt: "Set custom value on error",
    },
    PromptPreset {
        key: "deduplication",
        prompt: "Discard unchanged values with heartbeat",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::heuristic;
    use preproc_core::ValueType;

    #[test]
    fn test_each_preset_gets_a_matching_step() {
        let expected = [17, 11, 13, 0, 20];
        for (preset, id) in DEFAULT_PROMPTS.iter().zip(expected) {
            let steps = heuristic::generate(preset.prompt, "", ValueType::Numeric);
            assert!(
                steps.iter().any(|s| s.type_id == id),
                "{} should suggest {}",
                preset.key,
                id
            );
        }
    }
}
