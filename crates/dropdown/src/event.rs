//! Raw input events forwarded by the rendering layer.
//!
//! Keys are identified by their DOM `KeyboardEvent.key` name, so a host can
//! forward browser events without translation. Pointer and focus events carry
//! the root→target node path of the element they hit.
//!
//! # Example
//!
//! ```rust
//! use dropdown::event::{InputEvent, Key, KeyEvent};
//!
//! let key = KeyEvent::new(Key::parse("ArrowDown"));
//! assert_eq!(key.to_string(), "ArrowDown");
//!
//! let space = InputEvent::key(" ");
//! assert!(matches!(space, InputEvent::KeyDown(k) if k.key == Key::Space));
//! ```

use std::fmt;

/// Identifier of a node in the host's element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Path from the document root down to an event target.
///
/// The last element is the target itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EventPath(Vec<NodeId>);

impl EventPath {
    /// Creates a path from root-first node ids.
    pub fn new(nodes: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        Self(nodes.into_iter().map(Into::into).collect())
    }

    /// Returns the target node.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Returns whether `node` is the target or one of its ancestors.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }

    /// Iterates from the target up to the root.
    pub fn target_to_root(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().rev().copied()
    }

    /// Returns the nodes root first.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    /// Returns whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EventPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(">")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// A keyboard key, named after `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowUp`.
    ArrowUp,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// The space bar, reported as `" "`.
    Space,
    /// `Escape`.
    Escape,
    /// `Tab`.
    Tab,
    /// Any other key, stored verbatim.
    Other(String),
}

impl Key {
    /// Parses a DOM key name. Legacy aliases (`Down`, `Esc`, `Spacebar`) are accepted.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the canonical DOM key name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ArrowDown => "ArrowDown",
            Self::ArrowUp => "ArrowUp",
            Self::Home => "Home",
            Self::End => "End",
            Self::Enter => "Enter",
            Self::Space => " ",
            Self::Escape => "Escape",
            Self::Tab => "Tab",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// A keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    /// Whether Meta was held.
    pub meta: bool,
    /// Whether Shift was held.
    pub shift: bool,
}

impl KeyEvent {
    /// Creates an unmodified key event.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            alt: false,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// Sets the alt modifier.
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Sets the ctrl modifier.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Sets the meta modifier.
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Sets the shift modifier.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Returns whether a command modifier (alt, ctrl, meta) is held.
    ///
    /// Shift is not counted: Shift+Space still toggles.
    #[must_use]
    pub const fn has_command_modifier(&self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.alt {
            f.write_str("alt+")?;
        }
        if self.meta {
            f.write_str("meta+")?;
        }
        if self.shift {
            f.write_str("shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// An input event as forwarded by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed anywhere in the document.
    KeyDown(KeyEvent),
    /// A click landed on the path's target.
    Click(EventPath),
    /// A pointer went down on the path's target.
    PointerDown(EventPath),
    /// Focus moved to the path's target.
    FocusIn(EventPath),
    /// Focus left the widget's trigger or an option.
    FocusOut {
        /// Where focus is going, if anywhere.
        related: Option<EventPath>,
    },
}

impl InputEvent {
    /// Shorthand for an unmodified keydown by DOM key name.
    #[must_use]
    pub fn key(name: &str) -> Self {
        Self::KeyDown(KeyEvent::new(Key::parse(name)))
    }

    /// Shorthand for a click on a root-first path.
    pub fn click(path: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        Self::Click(EventPath::new(path))
    }

    /// Shorthand for a pointer down on a root-first path.
    pub fn pointer_down(path: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        Self::PointerDown(EventPath::new(path))
    }

    /// Shorthand for focus arriving at a root-first path.
    pub fn focus_in(path: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        Self::FocusIn(EventPath::new(path))
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyDown(key) => write!(f, "keydown {key:?}", key = key.to_string()),
            Self::Click(path) => write!(f, "click {path}"),
            Self::PointerDown(path) => write!(f, "pointerdown {path}"),
            Self::FocusIn(path) => write!(f, "focusin {path}"),
            Self::FocusOut { related: Some(path) } => write!(f, "focusout -> {path}"),
            Self::FocusOut { related: None } => f.write_str("focusout"),
        }
    }
}
