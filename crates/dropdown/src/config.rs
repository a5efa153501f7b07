//! Dropdown configuration supplied by the host.
//!
//! A configuration is immutable per render. Hosts swap in a new one through
//! [`Dropdown::set_config`](crate::Dropdown::set_config), which revalidates
//! the current selection against the new options.
//!
//! # Examples
//!
//! ```rust
//! use dropdown::{DropdownConfig, DropdownOption};
//!
//! let config = DropdownConfig::new(vec![
//!     DropdownOption::new("A", 1),
//!     DropdownOption::new("B", 2),
//! ])
//! .with_loop(true);
//! assert_eq!(config.key_index("B"), Some(1));
//!
//! // Hosts may also ship JSON; `loop` and `placeholder` are optional.
//! let config: DropdownConfig<u32> =
//!     DropdownConfig::from_json_str(r#"{"options":[{"key":"A","value":1}]}"#).unwrap();
//! assert!(!config.looping);
//! ```

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::nav::NavPolicy;

/// One selectable option.
///
/// Keys must be unique within a dropdown. Duplicate keys are not detected;
/// lookups by key resolve to the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption<T> {
    /// Display label and identity of the option.
    pub key: String,
    /// Opaque payload.
    pub value: T,
}

impl<T> DropdownOption<T> {
    /// Creates an option.
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl DropdownOption<String> {
    /// Creates options whose value equals their key.
    pub fn from_keys<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Vec<Self> {
        keys.into_iter()
            .map(|k| {
                let key: String = k.into();
                Self::new(key.clone(), key)
            })
            .collect()
    }
}

/// Options plus navigation behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownConfig<T> {
    /// Options in display order.
    pub options: Vec<DropdownOption<T>>,
    /// Whether arrow navigation wraps around at either end.
    #[serde(rename = "loop", default)]
    pub looping: bool,
    /// Trigger label shown while nothing is selected.
    #[serde(default)]
    pub placeholder: String,
}

impl<T> Default for DropdownConfig<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            looping: false,
            placeholder: String::new(),
        }
    }
}

impl<T> DropdownConfig<T> {
    /// Creates a non-looping configuration without a placeholder.
    #[must_use]
    pub fn new(options: Vec<DropdownOption<T>>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Sets whether navigation wraps around.
    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sets the placeholder label.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Returns the navigation policy for the `loop` flag.
    #[must_use]
    pub const fn nav_policy(&self) -> NavPolicy {
        NavPolicy::from_loop(self.looping)
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the index of the first option with this key.
    #[must_use]
    pub fn key_index(&self, key: &str) -> Option<usize> {
        self.options.iter().position(|o| o.key == key)
    }

    /// Returns the key of the option at `index`.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(|o| o.key.as_str())
    }
}

/// Wire forms accepted for a configuration: the full object or a bare option list.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDocument<T> {
    Full(DropdownConfig<T>),
    Options(Vec<DropdownOption<T>>),
}

impl<T: DeserializeOwned> DropdownConfig<T> {
    /// Parses a configuration from JSON.
    ///
    /// Accepts either `{"options": [...], "loop": bool, "placeholder": str}`
    /// or a bare `[{"key": .., "value": ..}, ...]` array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: ConfigDocument<T> = serde_json::from_str(json)?;
        Ok(doc.into_config())
    }

    /// Reads a configuration from a JSON stream.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }
}

impl<T> ConfigDocument<T> {
    fn into_config(self) -> DropdownConfig<T> {
        match self {
            Self::Full(config) => config,
            Self::Options(options) => DropdownConfig::new(options),
        }
    }
}
