//! ARIA attribute projection.
//!
//! [`project`] is a pure function of the dropdown state, the options and the
//! placeholder. It is recomputed after every transition so any renderer can
//! copy the attributes onto its own elements. Attribute values are the exact
//! strings assistive technology expects (`"true"` / `"false"`).
//!
//! While open, `aria-selected` marks the highlighted option so screen readers
//! follow keyboard navigation. While closed it marks the committed option.

use std::fmt;

use crate::config::DropdownOption;
use crate::state::DropdownState;

/// Class token carried by the trigger.
pub const TRIGGER_CLASS: &str = "dropdown-toggle";
/// Class token carried by the listbox.
pub const LISTBOX_CLASS: &str = "popover";
/// Extra class token added to the listbox while open.
pub const LISTBOX_ACTIVE_CLASS: &str = "active";

/// Renders a boolean ARIA state.
#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// What the trigger shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Key of the committed option.
    Selected(String),
    /// Placeholder text; may be empty.
    Placeholder(String),
}

impl Label {
    /// Returns the visible text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Selected(s) | Self::Placeholder(s) => s,
        }
    }

    /// Returns whether this is the placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Attributes for the trigger button.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerAttrs {
    /// Whether the listbox is expanded.
    pub expanded: bool,
    /// Visible label.
    pub label: Label,
}

impl TriggerAttrs {
    /// Value of `aria-expanded`.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        aria_bool(self.expanded)
    }

    /// Value of `aria-haspopup`.
    #[must_use]
    pub const fn aria_haspopup(&self) -> &'static str {
        "listbox"
    }

    /// Value of `class`.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        TRIGGER_CLASS
    }

    /// Inner markup: the label in a single inline text node.
    #[must_use]
    pub fn inner_html(&self) -> String {
        format!("<span>{}</span>", escape_html(self.label.text()))
    }
}

/// Attributes for the listbox container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListboxAttrs {
    /// Whether the listbox is shown.
    pub open: bool,
}

impl ListboxAttrs {
    /// Value of `class`: `popover`, plus `active` while open.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.open { "popover active" } else { LISTBOX_CLASS }
    }

    /// Returns whether the class list contains `token`.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.class().split(' ').any(|t| t == token)
    }
}

/// Attributes for one option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionAttrs {
    /// Position in the option list.
    pub index: usize,
    /// Option label.
    pub key: String,
    /// Whether the option is surfaced as selected.
    pub selected: bool,
}

impl OptionAttrs {
    /// Value of `aria-selected`.
    #[must_use]
    pub const fn aria_selected(&self) -> &'static str {
        aria_bool(self.selected)
    }
}

/// Complete attribute set for one render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AriaProjection {
    /// Trigger attributes.
    pub trigger: TriggerAttrs,
    /// Listbox attributes.
    pub listbox: ListboxAttrs,
    /// Per-option attributes, in option order.
    pub options: Vec<OptionAttrs>,
}

impl AriaProjection {
    /// Returns the option surfaced as selected, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&OptionAttrs> {
        self.options.iter().find(|o| o.selected)
    }

    /// Returns `aria-selected` for option `index`.
    #[must_use]
    pub fn aria_selected(&self, index: usize) -> Option<&'static str> {
        self.options.get(index).map(OptionAttrs::aria_selected)
    }
}

/// Projects the state onto ARIA attributes.
#[must_use]
pub fn project<T>(
    state: &DropdownState,
    options: &[DropdownOption<T>],
    placeholder: &str,
) -> AriaProjection {
    let label = state
        .selected_index
        .and_then(|i| options.get(i))
        .map_or_else(
            || Label::Placeholder(placeholder.to_string()),
            |o| Label::Selected(o.key.clone()),
        );

    let surfaced = if state.is_open {
        state.active_index
    } else {
        state.selected_index
    };

    AriaProjection {
        trigger: TriggerAttrs {
            expanded: state.is_open,
            label,
        },
        listbox: ListboxAttrs {
            open: state.is_open,
        },
        options: options
            .iter()
            .enumerate()
            .map(|(index, o)| OptionAttrs {
                index,
                key: o.key.clone(),
                selected: surfaced == Some(index),
            })
            .collect(),
    }
}

/// Escapes text for use inside markup and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
