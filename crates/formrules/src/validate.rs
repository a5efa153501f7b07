//! Evaluate-and-record entry point used by form fields.

use tracing::trace;

use crate::error::Result;
use crate::registry::ErrorRegistry;
use crate::rules::{FieldTarget, ValidatorRules, evaluate};

/// Evaluates `rules` for `target` and records the outcome in `registry`.
///
/// On an error message the field is flagged; otherwise its flag is cleared.
/// Only `target.name` is touched. The message is returned so the caller can
/// display it.
///
/// # Errors
///
/// Returns the custom predicate's error unchanged. The registry is not
/// modified in that case.
///
/// # Example
///
/// ```rust
/// use formrules::{ErrorRegistry, FieldTarget, ValidatorRules, validate_input_value};
///
/// let registry = ErrorRegistry::new();
/// let rules = ValidatorRules::required();
///
/// let msg = validate_input_value(&FieldTarget::new("name", ""), &rules, &registry).unwrap();
/// assert!(msg.is_some());
/// assert!(registry.contains("name"));
///
/// validate_input_value(&FieldTarget::new("name", "x"), &rules, &registry).unwrap();
/// assert!(!registry.contains("name"));
/// ```
pub fn validate_input_value(
    target: &FieldTarget,
    rules: &ValidatorRules,
    registry: &ErrorRegistry,
) -> Result<Option<String>> {
    let message = evaluate(target, rules)?;
    trace!(field = %target.name, error = ?message, "field evaluated");
    if message.is_some() {
        registry.insert(&target.name);
    } else {
        registry.remove(&target.name);
    }
    Ok(message)
}
