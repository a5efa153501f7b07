//! Which part of the widget, if any, an event landed on.
//!
//! The host reports pointer and focus events as root→target node paths. A
//! [`Region`] knows the node ids that make up one dropdown, so resolving a
//! path is a walk from the target towards the root that stops at the first
//! node belonging to the widget. A path that never passes through the widget
//! root is outside.

use crate::event::{EventPath, NodeId};

/// The widget part an event path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hit {
    /// The toggle trigger or one of its descendants.
    Trigger,
    /// The option at this index or one of its descendants.
    Option(usize),
    /// The listbox container itself, between options.
    Listbox,
    /// Some other node inside the widget root.
    Inside,
    /// Anywhere outside the widget subtree.
    Outside,
}

impl Hit {
    /// Returns whether the hit lies outside the widget.
    #[must_use]
    pub const fn is_outside(self) -> bool {
        matches!(self, Self::Outside)
    }
}

/// Node ids forming one dropdown's subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    root: NodeId,
    trigger: NodeId,
    listbox: NodeId,
    options: Vec<NodeId>,
}

impl Region {
    /// Node id of the document body in the [`standard`](Self::standard) layout.
    pub const BODY: NodeId = NodeId(0);
    const FIRST_OPTION: u32 = 4;

    /// Creates a region from host-assigned node ids.
    #[must_use]
    pub fn new(root: NodeId, trigger: NodeId, listbox: NodeId, options: Vec<NodeId>) -> Self {
        Self {
            root,
            trigger,
            listbox,
            options,
        }
    }

    /// Conventional layout for headless use with `count` options.
    ///
    /// `#0` is the document body, `#1` the widget root, `#2` the trigger,
    /// `#3` the listbox and options follow from `#4`.
    #[must_use]
    pub fn standard(count: usize) -> Self {
        let options = (Self::FIRST_OPTION..).take(count).map(NodeId).collect();
        Self::new(NodeId(1), NodeId(2), NodeId(3), options)
    }

    /// Returns the widget root.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the trigger node.
    #[must_use]
    pub const fn trigger(&self) -> NodeId {
        self.trigger
    }

    /// Returns the listbox node.
    #[must_use]
    pub const fn listbox(&self) -> NodeId {
        self.listbox
    }

    /// Returns the option nodes in option order.
    #[must_use]
    pub fn options(&self) -> &[NodeId] {
        &self.options
    }

    /// Path from the body to the trigger, as the host would report it.
    #[must_use]
    pub fn trigger_path(&self) -> EventPath {
        EventPath::new([Self::BODY, self.root, self.trigger])
    }

    /// Path from the body to the listbox.
    #[must_use]
    pub fn listbox_path(&self) -> EventPath {
        EventPath::new([Self::BODY, self.root, self.listbox])
    }

    /// Path from the body to option `index`, if it exists.
    #[must_use]
    pub fn option_path(&self, index: usize) -> Option<EventPath> {
        self.options
            .get(index)
            .map(|&node| EventPath::new([Self::BODY, self.root, self.listbox, node]))
    }

    /// Path to the document body, which is outside every widget.
    #[must_use]
    pub fn outside_path() -> EventPath {
        EventPath::new([Self::BODY])
    }

    /// Resolves an event path against this widget.
    #[must_use]
    pub fn hit(&self, path: &EventPath) -> Hit {
        if !path.contains(self.root) {
            return Hit::Outside;
        }
        for node in path.target_to_root() {
            if node == self.trigger {
                return Hit::Trigger;
            }
            if let Some(i) = self.options.iter().position(|&o| o == node) {
                return Hit::Option(i);
            }
            if node == self.listbox {
                return Hit::Listbox;
            }
            if node == self.root {
                break;
            }
        }
        Hit::Inside
    }

    /// Returns whether the path lies outside the widget subtree.
    #[must_use]
    pub fn is_outside(&self, path: &EventPath) -> bool {
        self.hit(path).is_outside()
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::standard(0)
    }
}
