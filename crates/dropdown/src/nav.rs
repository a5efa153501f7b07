//! Pure index arithmetic for moving the highlighted option.
//!
//! Every function takes the current index and the option count and returns
//! the next index. Nothing here knows about open/closed state; an empty
//! option list always yields `None`.
//!
//! # Example
//!
//! ```rust
//! use dropdown::nav::{NavPolicy, next, prev};
//!
//! assert_eq!(next(Some(2), 3, NavPolicy::Clamp), Some(2));
//! assert_eq!(next(Some(2), 3, NavPolicy::Loop), Some(0));
//! assert_eq!(prev(None, 3, NavPolicy::Clamp), Some(2));
//! ```

/// Behavior when navigation runs past either end of the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPolicy {
    /// Stop on the first/last option.
    #[default]
    Clamp,
    /// Wrap around to the other end.
    Loop,
}

impl NavPolicy {
    /// Maps the `loop` configuration flag to a policy.
    #[must_use]
    pub const fn from_loop(looping: bool) -> Self {
        if looping { Self::Loop } else { Self::Clamp }
    }

    /// Returns whether this policy wraps around.
    #[must_use]
    pub const fn is_loop(self) -> bool {
        matches!(self, Self::Loop)
    }
}

/// Index of the first option, if any.
#[must_use]
pub const fn first(len: usize) -> Option<usize> {
    if len == 0 { None } else { Some(0) }
}

/// Index of the last option, if any.
#[must_use]
pub const fn last(len: usize) -> Option<usize> {
    if len == 0 { None } else { Some(len - 1) }
}

/// Advances one option forward.
///
/// With no current index the first option is chosen.
#[must_use]
pub fn next(current: Option<usize>, len: usize, policy: NavPolicy) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Some(i) = current else {
        return first(len);
    };
    let i = i.min(len - 1);
    if i + 1 < len {
        Some(i + 1)
    } else if policy.is_loop() {
        Some(0)
    } else {
        Some(i)
    }
}

/// Moves one option backward.
///
/// With no current index the last option is chosen.
#[must_use]
pub fn prev(current: Option<usize>, len: usize, policy: NavPolicy) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Some(i) = current else {
        return last(len);
    };
    let i = i.min(len - 1);
    if i > 0 {
        Some(i - 1)
    } else if policy.is_loop() {
        Some(len - 1)
    } else {
        Some(0)
    }
}

/// Drops an index that no longer fits the option count.
#[must_use]
pub fn within(index: Option<usize>, len: usize) -> Option<usize> {
    index.filter(|&i| i < len)
}
