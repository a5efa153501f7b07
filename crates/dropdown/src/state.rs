//! Dropdown state and its pure transition function.
//!
//! [`DropdownState::apply`] is the whole state machine: given an [`Intent`],
//! the option count and the navigation policy it returns the next state.
//! It never fails and always returns a state satisfying the invariants:
//!
//! - a closed dropdown has no active index;
//! - every index is below the option count.

use std::fmt;

use serde::Serialize;

use crate::nav::{self, NavPolicy};

/// Why the dropdown closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseReason {
    /// The trigger was activated while open.
    Toggle,
    /// An option was committed.
    Selection,
    /// Escape was pressed.
    Escape,
    /// Pointer interaction landed outside the widget.
    OutsidePointer,
    /// Focus moved outside the widget.
    OutsideFocus,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Toggle => "toggle",
            Self::Selection => "selection",
            Self::Escape => "escape",
            Self::OutsidePointer => "outside-pointer",
            Self::OutsideFocus => "outside-focus",
        };
        f.write_str(name)
    }
}

/// What an input event asks the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "intent", content = "arg")]
pub enum Intent {
    /// Open when closed, close when open.
    Toggle,
    /// Commit the option at this index and close.
    Activate(usize),
    /// Close if open.
    Close(CloseReason),
    /// Highlight the next option, opening first if closed.
    Next,
    /// Highlight the previous option, opening first if closed.
    Prev,
    /// Highlight the first option, opening first if closed.
    First,
    /// Highlight the last option, opening first if closed.
    Last,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle => f.write_str("toggle"),
            Self::Activate(i) => write!(f, "activate({i})"),
            Self::Close(reason) => write!(f, "close({reason})"),
            Self::Next => f.write_str("next"),
            Self::Prev => f.write_str("prev"),
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
        }
    }
}

/// Open/closed state plus the highlighted and committed option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DropdownState {
    /// Whether the listbox is shown.
    pub is_open: bool,
    /// Keyboard-highlighted option; only set while open.
    pub active_index: Option<usize>,
    /// Committed option; survives open/close cycles.
    pub selected_index: Option<usize>,
}

impl DropdownState {
    /// The initial state: closed with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_open: false,
            active_index: None,
            selected_index: None,
        }
    }

    /// A closed state with the given committed option.
    #[must_use]
    pub const fn with_selected(selected_index: Option<usize>) -> Self {
        Self {
            is_open: false,
            active_index: None,
            selected_index,
        }
    }

    /// Returns the state after applying `intent` to a list of `len` options.
    #[must_use]
    pub fn apply(self, intent: Intent, len: usize, policy: NavPolicy) -> Self {
        let selected_index = nav::within(self.selected_index, len);
        let state = Self {
            selected_index,
            ..self
        };

        match intent {
            Intent::Toggle => {
                if state.is_open {
                    state.closed()
                } else {
                    state.opened(selected_index)
                }
            }
            Intent::Activate(index) => {
                if !state.is_open || index >= len {
                    return state;
                }
                Self {
                    is_open: false,
                    active_index: None,
                    selected_index: Some(index),
                }
            }
            Intent::Close(_) => {
                if state.is_open {
                    state.closed()
                } else {
                    state
                }
            }
            // Navigation keys do nothing on an empty list, not even open it.
            _ if len == 0 => state,
            Intent::Next => {
                if state.is_open {
                    state.highlight(nav::next(state.active_index, len, policy))
                } else {
                    state.opened(selected_index.or(nav::first(len)))
                }
            }
            Intent::Prev => {
                if state.is_open {
                    state.highlight(nav::prev(state.active_index, len, policy))
                } else {
                    state.opened(selected_index.or(nav::last(len)))
                }
            }
            Intent::First => state.opened(nav::first(len)),
            Intent::Last => state.opened(nav::last(len)),
        }
    }

    /// Returns whether the state satisfies its invariants for `len` options.
    #[must_use]
    pub fn is_consistent(&self, len: usize) -> bool {
        let in_bounds = |i: Option<usize>| i.is_none_or(|i| i < len);
        in_bounds(self.active_index)
            && in_bounds(self.selected_index)
            && (self.is_open || self.active_index.is_none())
    }

    fn opened(self, active_index: Option<usize>) -> Self {
        Self {
            is_open: true,
            active_index,
            ..self
        }
    }

    fn closed(self) -> Self {
        Self {
            is_open: false,
            active_index: None,
            ..self
        }
    }

    fn highlight(self, active_index: Option<usize>) -> Self {
        Self {
            active_index,
            ..self
        }
    }
}

/// A completed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// The intent that caused the change.
    pub intent: Intent,
    /// State before the intent was applied.
    pub before: DropdownState,
    /// State after the intent was applied.
    pub after: DropdownState,
}

impl Transition {
    /// Returns whether the dropdown went from closed to open.
    #[must_use]
    pub const fn opened(&self) -> bool {
        !self.before.is_open && self.after.is_open
    }

    /// Returns whether the dropdown went from open to closed.
    #[must_use]
    pub const fn closed(&self) -> bool {
        self.before.is_open && !self.after.is_open
    }

    /// Returns the newly committed index, if the selection changed.
    #[must_use]
    pub fn selection_changed(&self) -> Option<usize> {
        if self.before.selected_index == self.after.selected_index {
            None
        } else {
            self.after.selected_index
        }
    }

    /// Returns the close reason when this transition closed the dropdown.
    #[must_use]
    pub fn close_reason(&self) -> Option<CloseReason> {
        if !self.closed() {
            return None;
        }
        match self.intent {
            Intent::Toggle => Some(CloseReason::Toggle),
            Intent::Activate(_) => Some(CloseReason::Selection),
            Intent::Close(reason) => Some(reason),
            _ => None,
        }
    }
}
