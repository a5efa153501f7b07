//! Error types for rule evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a field's rules.
///
/// A rule that merely *fails* is not an error: it yields a message from
/// [`evaluate`](crate::evaluate). These variants cover rules that could not be
/// evaluated at all.
///
/// # Example
///
/// ```rust
/// use formrules::{FieldTarget, RuleError, ValidatorRules};
///
/// let rules = ValidatorRules::new().custom(|_| Err(RuleError::predicate("lookup failed")));
/// let err = formrules::evaluate(&FieldTarget::new("email", "a@b"), &rules).unwrap_err();
/// assert_eq!(err.to_string(), "custom rule failed: lookup failed");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A custom predicate raised an error.
    ///
    /// The validator does not catch it; it propagates to the caller and the
    /// error registry is left as it was.
    #[error("custom rule failed: {0}")]
    Predicate(String),

    /// A serialized rule descriptor could not be parsed.
    #[error("invalid rule descriptor: {0}")]
    InvalidDescriptor(String),
}

impl RuleError {
    /// Creates a predicate error.
    pub fn predicate(message: impl Into<String>) -> Self {
        Self::Predicate(message.into())
    }

    /// Returns whether the error came from a custom predicate.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDescriptor(err.to_string())
    }
}

/// A specialized [`Result`] type for rule evaluation.
pub type Result<T> = std::result::Result<T, RuleError>;
