//! Rebindable keys for dropdown navigation.
//!
//! Bindings hold DOM key names. A binding with no keys, or one that has been
//! disabled, never matches.
//!
//! # Example
//!
//! ```rust
//! use dropdown::event::Key;
//! use dropdown::keymap::{Binding, KeyMap};
//!
//! let mut keymap = KeyMap::default();
//! assert!(keymap.next.matches(&Key::ArrowDown));
//!
//! // Vim-style navigation on top of the arrows.
//! keymap.next = Binding::new().keys(&["ArrowDown", "j"]);
//! assert!(keymap.next.matches(&Key::parse("j")));
//! ```

use crate::event::Key;

/// A set of keys that trigger one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<String>,
    disabled: bool,
}

impl Binding {
    /// Creates an empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the DOM key names for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.set_keys(keys);
        self
    }

    /// Replaces the key names in place.
    pub fn set_keys(&mut self, keys: &[&str]) {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
    }

    /// Returns the bound key names.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Creates a disabled copy of the binding.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding can match anything.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns whether `key` triggers this binding.
    #[must_use]
    pub fn matches(&self, key: &Key) -> bool {
        self.enabled() && self.keys.iter().any(|k| Key::parse(k) == *key)
    }
}

/// Key bindings for the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Highlight the next option (opens when closed).
    pub next: Binding,
    /// Highlight the previous option (opens when closed).
    pub prev: Binding,
    /// Highlight the first option (opens when closed).
    pub first: Binding,
    /// Highlight the last option (opens when closed).
    pub last: Binding,
    /// Toggle from the trigger, or commit from a focused option.
    pub toggle: Binding,
    /// Close without committing.
    pub close: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next: Binding::new().keys(&["ArrowDown"]),
            prev: Binding::new().keys(&["ArrowUp"]),
            first: Binding::new().keys(&["Home"]),
            last: Binding::new().keys(&["End"]),
            toggle: Binding::new().keys(&[" ", "Enter"]),
            close: Binding::new().keys(&["Escape"]),
        }
    }
}
