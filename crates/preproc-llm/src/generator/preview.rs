//! Simulated run of a step list
//!
//! Nothing is executed: the preview lists the input and the steps in order.
//! Running the steps for real needs the monitoring server.

use preproc_core::{StepCatalog, StepSuggestion};
use serde::Serialize;

/// Input shown when the caller gives no sample value
pub const DEFAULT_TEST_INPUT: &str = "Sample value for testing";

pub const SIMULATION_NOTE: &str =
    "This is a simulation. Actual testing requires execution by the monitoring server.";

/// Result of a simulated run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepPreview {
    pub input: String,
    /// Numbered step lines, e.g. `1. JSONPath: $.data.value [on fail]`
    pub steps: Vec<String>,
    pub note: &'static str,
}

pub fn preview_steps(sample_value: &str, steps: &[StepSuggestion], catalog: &StepCatalog) -> StepPreview {
    let input = match sample_value.trim() {
        "" => DEFAULT_TEST_INPUT.to_string(),
        trimmed => trimmed.to_string(),
    };

    StepPreview {
        input,
        steps: steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step.display_line(catalog)))
            .collect(),
        note: SIMULATION_NOTE,
    }
}
