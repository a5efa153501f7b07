#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Dropdown
//!
//! A headless single-select dropdown (listbox) state machine.
//!
//! The crate owns the interaction logic of a dropdown widget and nothing
//! else: rendering stays with the host, which forwards input events and
//! copies the projected ARIA attributes onto its own elements.
//!
//! - **nav** - Index arithmetic for clamped and looping navigation
//! - **state** - Dropdown state, intents and the pure transition function
//! - **event** - Input events and root-to-target node paths
//! - **keymap** - Rebindable key bindings
//! - **intent** - Event-to-intent mapping, focus and the activity guard
//! - **region** - Widget node layout and outside-interaction detection
//! - **aria** - ARIA attribute projection
//! - **view** - Deterministic markup of the projection
//! - **config** - Options, `loop` and placeholder, with JSON loading
//! - **simulator** - FIFO event dispatch for headless runs
//! - **script** - Line-oriented event scripts
//!
//! ## Example
//!
//! ```rust
//! use dropdown::prelude::*;
//!
//! let mut dd = Dropdown::new(
//!     DropdownConfig::new(DropdownOption::from_keys(["A", "B", "C"])).with_loop(true),
//! );
//! dd.update(&InputEvent::FocusIn(dd.region().trigger_path()));
//! dd.update(&InputEvent::key("ArrowUp"));
//! assert_eq!(dd.active_index(), Some(2));
//!
//! dd.update(&InputEvent::key("Escape"));
//! assert_eq!(dd.aria().trigger.aria_expanded(), "false");
//! ```

pub mod aria;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod intent;
pub mod keymap;
pub mod nav;
pub mod region;
pub mod script;
pub mod simulator;
pub mod state;
pub mod view;

pub use aria::AriaProjection;
pub use config::{DropdownConfig, DropdownOption};
pub use dropdown::Dropdown;
pub use error::{Error, Result};
pub use event::{EventPath, InputEvent, Key, KeyEvent, NodeId};
pub use intent::Focus;
pub use keymap::{Binding, KeyMap};
pub use nav::NavPolicy;
pub use region::{Hit, Region};
pub use simulator::{SimulationStats, Simulator};
pub use state::{CloseReason, DropdownState, Intent, Transition};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aria::{AriaProjection, Label};
    pub use crate::config::{DropdownConfig, DropdownOption};
    pub use crate::dropdown::Dropdown;
    pub use crate::event::{EventPath, InputEvent, Key, KeyEvent, NodeId};
    pub use crate::intent::Focus;
    pub use crate::keymap::{Binding, KeyMap};
    pub use crate::region::{Hit, Region};
    pub use crate::simulator::Simulator;
    pub use crate::state::{CloseReason, DropdownState, Intent, Transition};
}
