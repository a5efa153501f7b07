//! The dropdown model.
//!
//! [`Dropdown`] owns one widget's state and ties the layers together: it
//! tracks focus, maps each [`InputEvent`] to an [`Intent`], applies it with
//! the pure transition function and exposes the ARIA projection of the
//! result. Every call to [`Dropdown::update`] completes a whole transition
//! before returning.
//!
//! # Example
//!
//! ```rust
//! use dropdown::{Dropdown, DropdownConfig, DropdownOption, InputEvent};
//!
//! let mut dd = Dropdown::new(DropdownConfig::new(DropdownOption::from_keys(["A", "B", "C"])));
//! let trigger = dd.region().trigger_path();
//!
//! dd.update(&InputEvent::Click(trigger.clone()));
//! assert_eq!(dd.aria().trigger.aria_expanded(), "true");
//!
//! dd.update(&InputEvent::FocusIn(trigger));
//! dd.update(&InputEvent::key("ArrowDown"));
//! dd.update(&InputEvent::key("ArrowDown"));
//! let option = dd.region().option_path(1).unwrap();
//! dd.update(&InputEvent::Click(option));
//!
//! assert!(!dd.is_open());
//! assert_eq!(dd.aria().trigger.inner_html(), "<span>B</span>");
//! ```

use tracing::{debug, trace};

use crate::aria::{self, AriaProjection};
use crate::config::{DropdownConfig, DropdownOption};
use crate::event::InputEvent;
use crate::intent::{self, Context, Focus};
use crate::keymap::KeyMap;
use crate::region::Region;
use crate::state::{DropdownState, Intent, Transition};
use crate::view;

/// A single-select dropdown.
#[derive(Debug, Clone)]
pub struct Dropdown<T> {
    config: DropdownConfig<T>,
    state: DropdownState,
    focus: Focus,
    keymap: KeyMap,
    region: Region,
    custom_region: bool,
}

impl<T> Dropdown<T> {
    /// Creates a closed dropdown with nothing selected.
    #[must_use]
    pub fn new(config: DropdownConfig<T>) -> Self {
        let region = Region::standard(config.len());
        Self {
            config,
            state: DropdownState::new(),
            focus: Focus::Outside,
            keymap: KeyMap::default(),
            region,
            custom_region: false,
        }
    }

    /// Replaces the key bindings.
    #[must_use]
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Uses host-assigned node ids instead of the standard layout.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.set_region(region);
        self
    }

    /// Starts with the option at `index` committed.
    #[must_use]
    pub fn with_selected(mut self, index: usize) -> Self {
        self.set_selected(Some(index));
        self
    }

    /// Feeds one input event through the state machine.
    ///
    /// Returns the transition when the state changed. Events that are not
    /// meant for this widget, or that change nothing, return `None`.
    pub fn update(&mut self, event: &InputEvent) -> Option<Transition> {
        let ctx = Context {
            is_open: self.state.is_open,
            focus: self.focus,
            keymap: &self.keymap,
            region: &self.region,
        };
        let intent = intent::resolve(event, &ctx);
        self.track_focus(event);

        let Some(intent) = intent else {
            trace!(event = %event, focus = ?self.focus, "dropdown ignored event");
            return None;
        };
        self.dispatch(intent)
    }

    /// Applies an intent directly, bypassing event mapping.
    pub fn dispatch(&mut self, intent: Intent) -> Option<Transition> {
        let before = self.state;
        let after = before.apply(intent, self.config.len(), self.config.nav_policy());
        if after == before {
            trace!(%intent, "dropdown intent changed nothing");
            return None;
        }
        self.state = after;
        debug!(
            %intent,
            open = after.is_open,
            active = ?after.active_index,
            selected = ?after.selected_index,
            "dropdown transition"
        );
        Some(Transition {
            intent,
            before,
            after,
        })
    }

    fn track_focus(&mut self, event: &InputEvent) {
        match event {
            InputEvent::FocusIn(path) => {
                self.focus = Focus::from_hit(self.region.hit(path));
            }
            InputEvent::FocusOut { related } => {
                self.focus = related
                    .as_ref()
                    .map_or(Focus::Outside, |path| Focus::from_hit(self.region.hit(path)));
            }
            InputEvent::KeyDown(_) | InputEvent::Click(_) | InputEvent::PointerDown(_) => {}
        }
    }

    /// Overrides the tracked focus location.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Commits an option without opening the listbox. Out-of-range indices clear the selection.
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.state.selected_index = index.filter(|&i| i < self.config.len());
    }

    /// Commits the option with this key. Returns whether it exists.
    pub fn select_key(&mut self, key: &str) -> bool {
        let index = self.config.key_index(key);
        if index.is_some() {
            self.state.selected_index = index;
        }
        index.is_some()
    }

    /// Replaces the configuration and revalidates indices against it.
    ///
    /// The selection follows its key to the new position, or is cleared when
    /// the key is gone. While open, the highlight follows its key too and is
    /// clamped into the new bounds otherwise.
    pub fn set_config(&mut self, config: DropdownConfig<T>) {
        let old = std::mem::replace(&mut self.config, config);
        let len = self.config.len();

        let selected_index = self
            .state
            .selected_index
            .and_then(|i| old.key_at(i))
            .and_then(|key| self.config.key_index(key));

        let active_index = if self.state.is_open {
            self.state.active_index.and_then(|i| {
                old.key_at(i)
                    .and_then(|key| self.config.key_index(key))
                    .or_else(|| crate::nav::last(len).map(|last| i.min(last)))
            })
        } else {
            None
        };

        self.state = DropdownState {
            is_open: self.state.is_open,
            active_index,
            selected_index,
        };
        if !self.custom_region && self.region.options().len() != len {
            self.region = Region::standard(len);
        }
        debug!(
            options = len,
            looping = self.config.looping,
            active = ?active_index,
            selected = ?selected_index,
            "dropdown reconfigured"
        );
    }

    /// Replaces the options, keeping `loop` and the placeholder.
    pub fn set_options(&mut self, options: Vec<DropdownOption<T>>) {
        let config = DropdownConfig {
            options,
            looping: self.config.looping,
            placeholder: std::mem::take(&mut self.config.placeholder),
        };
        self.set_config(config);
    }

    /// Changes the `loop` flag. Indices are untouched.
    pub fn set_loop(&mut self, looping: bool) {
        self.config.looping = looping;
        debug!(looping, "dropdown loop changed");
    }

    /// Replaces the node layout used to resolve event targets.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        self.custom_region = true;
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> DropdownState {
        self.state
    }

    /// Returns whether the listbox is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Returns the highlighted option index.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    /// Returns the committed option index.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    /// Returns the committed option.
    #[must_use]
    pub fn selected_option(&self) -> Option<&DropdownOption<T>> {
        self.state.selected_index.and_then(|i| self.config.options.get(i))
    }

    /// Returns the committed option's value.
    #[must_use]
    pub fn selected_value(&self) -> Option<&T> {
        self.selected_option().map(|o| &o.value)
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[DropdownOption<T>] {
        &self.config.options
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DropdownConfig<T> {
        &self.config
    }

    /// Returns the tracked focus location.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns whether keyboard input currently reaches the widget.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_open || self.focus == Focus::Trigger
    }

    /// Returns the node layout.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the key bindings.
    #[must_use]
    pub const fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Returns the key bindings for editing.
    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    /// Projects the current state onto ARIA attributes.
    #[must_use]
    pub fn aria(&self) -> AriaProjection {
        aria::project(&self.state, &self.config.options, &self.config.placeholder)
    }

    /// Renders the current markup.
    #[must_use]
    pub fn view(&self) -> String {
        view::render_markup(&self.aria())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Hit;
    use crate::state::CloseReason;

    fn abc() -> Dropdown<String> {
        Dropdown::new(DropdownConfig::new(DropdownOption::from_keys(["A", "B", "C"])))
    }

    fn focus_trigger(dd: &mut Dropdown<String>) {
        let path = dd.region().trigger_path();
        dd.update(&InputEvent::FocusIn(path));
    }

    #[test]
    fn test_focus_tracking() {
        let mut dd = abc();
        assert_eq!(dd.focus(), Focus::Outside);
        focus_trigger(&mut dd);
        assert_eq!(dd.focus(), Focus::Trigger);
        assert!(dd.is_active());
        dd.update(&InputEvent::FocusOut { related: None });
        assert_eq!(dd.focus(), Focus::Outside);
        assert!(!dd.is_active());
    }

    #[test]
    fn test_update_returns_transition() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        let t = dd.update(&InputEvent::key("End")).unwrap();
        assert!(t.opened());
        assert_eq!(t.after.active_index, Some(2));
        let t = dd.update(&InputEvent::key("Escape")).unwrap();
        assert_eq!(t.close_reason(), Some(CloseReason::Escape));
    }

    #[test]
    fn test_noop_returns_none() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        dd.update(&InputEvent::key("Home"));
        assert!(dd.update(&InputEvent::key("Home")).is_none());
    }

    #[test]
    fn test_select_key_and_value() {
        let mut dd = abc();
        assert!(dd.select_key("C"));
        assert!(!dd.select_key("Z"));
        assert_eq!(dd.selected_value().map(String::as_str), Some("C"));
        dd.set_selected(Some(9));
        assert_eq!(dd.selected_index(), None);
    }

    #[test]
    fn test_set_options_remaps_selection_by_key() {
        let mut dd = abc().with_selected(1);
        dd.set_options(DropdownOption::from_keys(["X", "B"]));
        assert_eq!(dd.selected_index(), Some(1));
        dd.set_options(DropdownOption::from_keys(["B", "Y"]));
        assert_eq!(dd.selected_index(), Some(0));
        dd.set_options(DropdownOption::from_keys(["Y"]));
        assert_eq!(dd.selected_index(), None);
    }

    #[test]
    fn test_set_options_while_open_clamps_active() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        dd.update(&InputEvent::key("End"));
        assert_eq!(dd.active_index(), Some(2));
        dd.set_options(DropdownOption::from_keys(["A", "B"]));
        assert!(dd.is_open());
        assert_eq!(dd.active_index(), Some(1));
        dd.set_options(Vec::new());
        assert_eq!(dd.active_index(), None);
        assert!(dd.state().is_consistent(0));
    }

    #[test]
    fn test_set_options_keeps_placeholder_and_loop() {
        let mut dd = Dropdown::new(
            DropdownConfig::new(DropdownOption::from_keys(["A"]))
                .with_loop(true)
                .placeholder("Pick"),
        );
        dd.set_options(DropdownOption::from_keys(["A", "B"]));
        assert!(dd.config().looping);
        assert_eq!(dd.config().placeholder, "Pick");
    }

    #[test]
    fn test_standard_region_follows_option_count() {
        let mut dd = abc();
        dd.set_options(DropdownOption::from_keys(["A", "B", "C", "D"]));
        let path = dd.region().option_path(3).unwrap();
        assert_eq!(dd.region().hit(&path), Hit::Option(3));
    }

    #[test]
    fn test_custom_region_is_kept() {
        use crate::event::NodeId;
        let region = Region::new(NodeId(10), NodeId(11), NodeId(12), vec![NodeId(13)]);
        let mut dd = abc().with_region(region.clone());
        dd.set_options(DropdownOption::from_keys(["A", "B"]));
        assert_eq!(dd.region(), &region);
    }

    #[test]
    fn test_rebound_keys() {
        let mut dd = abc();
        dd.keymap_mut().next.set_keys(&["j"]);
        focus_trigger(&mut dd);
        assert!(dd.update(&InputEvent::key("ArrowDown")).is_none());
        assert!(dd.update(&InputEvent::key("j")).is_some());
        assert_eq!(dd.active_index(), Some(0));
    }
}
