//! Form injection capability
//!
//! Inserting accepted steps into the host's item form is done by the host
//! (it owns the page). This crate only defines the capability and the rule
//! that nothing structurally invalid is handed to it.

use crate::error::{CoreError, Result};
use crate::step::StepSuggestion;
use crate::validation::validate_suggestions;

/// Host capability that appends steps to an item's preprocessing form
pub trait FormInjector: Send + Sync {
    /// Insert steps in order. Returns the number of rows added.
    fn insert_steps(&self, steps: &[StepSuggestion]) -> Result<usize>;
}

/// Validate `steps` and hand them to the injector.
///
/// An empty list is a no-op and never reaches the injector.
pub fn apply_suggestions(injector: &dyn FormInjector, steps: &[StepSuggestion]) -> Result<usize> {
    if steps.is_empty() {
        return Ok(0);
    }

    let report = validate_suggestions(steps);
    if !report.ok {
        return Err(CoreError::InvalidSteps(report.errors));
    }

    injector.insert_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingInjector {
        inserted: Mutex<Vec<StepSuggestion>>,
    }

    impl FormInjector for RecordingInjector {
        fn insert_steps(&self, steps: &[StepSuggestion]) -> Result<usize> {
            let mut inserted = self.inserted.lock().unwrap();
            inserted.extend_from_slice(steps);
            Ok(steps.len())
        }
    }

    struct FailingInjector;

    impl FormInjector for FailingInjector {
        fn insert_steps(&self, _steps: &[StepSuggestion]) -> Result<usize> {
            Err(CoreError::Injection("preprocessing section not found".to_string()))
        }
    }

    #[test]
    fn test_apply_inserts_in_order() {
        let injector = RecordingInjector::default();
        let steps = vec![
            StepSuggestion::new("Trim", 12, ""),
            StepSuggestion::new("Regular expression", 11, "([0-9]+)").with_on_fail(true),
        ];

        let added = apply_suggestions(&injector, &steps).unwrap();
        assert_eq!(added, 2);
        assert_eq!(*injector.inserted.lock().unwrap(), steps);
    }

    #[test]
    fn test_apply_empty_is_noop() {
        assert_eq!(apply_suggestions(&FailingInjector, &[]).unwrap(), 0);
    }

    #[test]
    fn test_injector_error_propagates() {
        let steps = vec![StepSuggestion::new("Trim", 12, "")];
        let err = apply_suggestions(&FailingInjector, &steps).unwrap_err();
        assert!(err.to_string().contains("preprocessing section not found"));
    }
}
