//! Rule descriptors and their evaluation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Message returned when a required field is empty.
pub const REQUIRED_MESSAGE: &str = "field is required";

/// The input element a rule is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldTarget {
    /// Field name; the key used in the error registry.
    pub name: String,
    /// Current value. `None` stands for a missing value.
    #[serde(default)]
    pub value: Option<String>,
    /// Input type, e.g. `"text"` or `"checkbox"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Checked state for checkable inputs.
    #[serde(default)]
    pub checked: Option<bool>,
}

impl FieldTarget {
    /// Creates a target with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Creates a target without a value.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the input type.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Returns whether the value is missing or the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }
}

/// Built-in rule kinds.
///
/// Unknown kinds are kept verbatim and never produce an error, so forms can
/// carry descriptors meant for other validators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleKind {
    /// The value must be present and non-empty.
    Required,
    /// A kind this validator does not evaluate.
    Other(String),
}

impl RuleKind {
    /// Returns the descriptor name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "Required",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for RuleKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Required" => Self::Required,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for RuleKind {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Required => "Required".to_string(),
            RuleKind::Other(name) => name,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied rule. Returns an error message, `None` when valid, or
/// a [`RuleError`](crate::RuleError) when it cannot decide.
pub type CustomRule = Arc<dyn Fn(&FieldTarget) -> Result<Option<String>> + Send + Sync>;

/// The rules attached to one field.
#[derive(Clone, Default)]
pub struct ValidatorRules {
    /// Built-in rule kind.
    pub kind: Option<RuleKind>,
    /// Custom predicate. When present it decides alone.
    pub custom: Option<CustomRule>,
}

impl fmt::Debug for ValidatorRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRules")
            .field("kind", &self.kind)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[derive(Deserialize)]
struct RuleDescriptor {
    #[serde(rename = "type", default)]
    kind: Option<RuleKind>,
}

impl ValidatorRules {
    /// Creates an empty rule set; every value passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule set that requires a value.
    #[must_use]
    pub fn required() -> Self {
        Self::new().with_kind(RuleKind::Required)
    }

    /// Sets the built-in kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<RuleKind>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the custom predicate.
    #[must_use]
    pub fn custom<F>(mut self, rule: F) -> Self
    where
        F: Fn(&FieldTarget) -> Result<Option<String>> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(rule));
        self
    }

    /// Parses a descriptor such as `{"type": "Required"}`.
    ///
    /// Custom predicates cannot be serialized; attach them afterwards with
    /// [`custom`](Self::custom).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let descriptor: RuleDescriptor = serde_json::from_str(json)?;
        Ok(Self {
            kind: descriptor.kind,
            custom: None,
        })
    }
}

/// Evaluates `rules` against `target`.
///
/// A custom predicate is authoritative: its answer, or its error, is returned
/// as is and the built-in kind is not consulted. Otherwise `Required` fails
/// on a missing or empty value and every other kind passes.
///
/// Evaluation has no side effects; equal inputs give equal results.
///
/// # Example
///
/// ```rust
/// use formrules::{FieldTarget, ValidatorRules, evaluate};
///
/// let rules = ValidatorRules::required();
/// assert!(evaluate(&FieldTarget::new("name", ""), &rules).unwrap().is_some());
/// assert!(evaluate(&FieldTarget::new("name", "x"), &rules).unwrap().is_none());
/// ```
pub fn evaluate(target: &FieldTarget, rules: &ValidatorRules) -> Result<Option<String>> {
    if let Some(custom) = &rules.custom {
        return custom(target);
    }
    let message = match &rules.kind {
        Some(RuleKind::Required) if target.is_empty() => Some(REQUIRED_MESSAGE.to_string()),
        Some(RuleKind::Required | RuleKind::Other(_)) | None => None,
    };
    Ok(message)
}
