#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! # Formrules
//!
//! Evaluates a form field against its rule descriptor and keeps a shared
//! registry of which fields currently have errors.
//!
//! - [`evaluate`] is pure: a custom predicate decides alone when present,
//!   otherwise the `Required` kind rejects missing or empty values.
//! - [`validate_input_value`] evaluates and then flags or clears the field in
//!   an [`ErrorRegistry`] shared by the whole form.
//!
//! ## Example
//!
//! ```rust
//! use formrules::prelude::*;
//!
//! let registry = ErrorRegistry::new();
//! let email = ValidatorRules::required();
//! let age = ValidatorRules::new().custom(|t| {
//!     let ok = t.value.as_deref().is_some_and(|v| v.parse::<u8>().is_ok());
//!     Ok((!ok).then(|| "age must be a number".to_string()))
//! });
//!
//! validate_input_value(&FieldTarget::new("email", ""), &email, &registry)?;
//! validate_input_value(&FieldTarget::new("age", "42"), &age, &registry)?;
//! assert_eq!(registry.fields(), vec!["email"]);
//! # Ok::<(), formrules::RuleError>(())
//! ```

pub mod error;
pub mod registry;
pub mod rules;
pub mod validate;

pub use error::{Result, RuleError};
pub use registry::{ErrorMap, ErrorRegistry};
pub use rules::{CustomRule, FieldTarget, REQUIRED_MESSAGE, RuleKind, ValidatorRules, evaluate};
pub use validate::validate_input_value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::RuleError;
    pub use crate::registry::ErrorRegistry;
    pub use crate::rules::{FieldTarget, RuleKind, ValidatorRules, evaluate};
    pub use crate::validate::validate_input_value;
}
