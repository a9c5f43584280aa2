//! Extraction of step lists from provider responses

use crate::client::ResponseShape;
use crate::generator::heuristic;
use preproc_core::{StepSuggestion, ValueType, MAX_STEPS};
use serde_json::Value;

/// Text between the first `[` and the last `]`, inclusive.
///
/// Brackets are not balanced: prose after the array that itself contains a
/// `]` will widen the span and usually make it unparsable.
pub fn bracketed_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Raw step objects from a provider response, when the completion holds a
/// JSON array of objects
pub fn extract_step_objects(raw: &Value, shape: ResponseShape) -> Option<Vec<Value>> {
    let text = shape.completion_text(raw);
    let span = bracketed_span(&text)?;

    match serde_json::from_str::<Value>(span).ok()? {
        Value::Array(items) if items.iter().all(Value::is_object) => Some(items),
        _ => None,
    }
}

/// Step suggestions from a provider response. Never fails: anything that does
/// not convert is replaced by the generic default steps.
pub fn extract(raw: &Value, shape: ResponseShape) -> Vec<StepSuggestion> {
    extract_step_objects(raw, shape)
        .and_then(|items| to_suggestions(&items))
        .unwrap_or_else(|| heuristic::generate("", "", ValueType::Numeric))
}

/// Convert every object, or none. Lists are capped at [`MAX_STEPS`].
pub(crate) fn to_suggestions(items: &[Value]) -> Option<Vec<StepSuggestion>> {
    items
        .iter()
        .take(MAX_STEPS)
        .map(StepSuggestion::from_value)
        .collect()
}
