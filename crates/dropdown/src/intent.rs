//! Mapping raw input events to state machine intents.
//!
//! Keyboard events arrive from a document-wide listener, so most of them are
//! not meant for the dropdown. The guard is explicit: a closed dropdown whose
//! trigger does not hold focus is inactive and ignores every key.

use crate::event::{InputEvent, KeyEvent};
use crate::keymap::KeyMap;
use crate::region::{Hit, Region};
use crate::state::{CloseReason, Intent};

/// Where keyboard focus currently sits relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Focus is outside the widget, or nowhere.
    #[default]
    Outside,
    /// The trigger holds focus.
    Trigger,
    /// An option element holds focus.
    Option(usize),
    /// Some other node inside the widget holds focus.
    Inside,
}

impl Focus {
    /// Focus implied by a resolved event target.
    #[must_use]
    pub const fn from_hit(hit: Hit) -> Self {
        match hit {
            Hit::Trigger => Self::Trigger,
            Hit::Option(i) => Self::Option(i),
            Hit::Listbox | Hit::Inside => Self::Inside,
            Hit::Outside => Self::Outside,
        }
    }
}

/// Widget facts the mapping depends on.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Whether the listbox is open.
    pub is_open: bool,
    /// Current focus location.
    pub focus: Focus,
    /// Active key bindings.
    pub keymap: &'a KeyMap,
    /// Node layout of the widget.
    pub region: &'a Region,
}

impl Context<'_> {
    /// Returns whether keyboard input is meant for this widget.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_open || self.focus == Focus::Trigger
    }
}

/// Maps an input event to an intent, or `None` when the event is not for us.
#[must_use]
pub fn resolve(event: &InputEvent, ctx: &Context<'_>) -> Option<Intent> {
    match event {
        InputEvent::KeyDown(key) => resolve_key(key, ctx),
        InputEvent::Click(path) => match ctx.region.hit(path) {
            Hit::Trigger => Some(Intent::Toggle),
            Hit::Option(i) if ctx.is_open => Some(Intent::Activate(i)),
            Hit::Outside if ctx.is_open => Some(Intent::Close(CloseReason::OutsidePointer)),
            _ => None,
        },
        InputEvent::PointerDown(path) => (ctx.is_open && ctx.region.is_outside(path))
            .then_some(Intent::Close(CloseReason::OutsidePointer)),
        InputEvent::FocusIn(path) => (ctx.is_open && ctx.region.is_outside(path))
            .then_some(Intent::Close(CloseReason::OutsideFocus)),
        // Focus dropping onto a non-focusable node (no related target) happens
        // mid-click on an option, so only a known outside destination closes.
        InputEvent::FocusOut { related } => related
            .as_ref()
            .filter(|path| ctx.is_open && ctx.region.is_outside(path))
            .map(|_| Intent::Close(CloseReason::OutsideFocus)),
    }
}

fn resolve_key(key: &KeyEvent, ctx: &Context<'_>) -> Option<Intent> {
    if !ctx.is_active() || key.has_command_modifier() {
        return None;
    }
    let keymap = ctx.keymap;
    let k = &key.key;

    if keymap.toggle.matches(k) {
        return match ctx.focus {
            Focus::Option(i) if ctx.is_open => Some(Intent::Activate(i)),
            Focus::Trigger => Some(Intent::Toggle),
            _ => None,
        };
    }
    if keymap.close.matches(k) {
        return ctx.is_open.then_some(Intent::Close(CloseReason::Escape));
    }
    if keymap.next.matches(k) {
        Some(Intent::Next)
    } else if keymap.prev.matches(k) {
        Some(Intent::Prev)
    } else if keymap.first.matches(k) {
        Some(Intent::First)
    } else if keymap.last.matches(k) {
        Some(Intent::Last)
    } else {
        None
    }
}
