//! Deterministic markup for an [`AriaProjection`].
//!
//! This is the model's string view, used for snapshots and headless hosts.
//! Real renderers copy the projected attributes onto their own elements.

use std::fmt::Write;

use crate::aria::{AriaProjection, escape_html};

/// Renders the widget as indented HTML.
///
/// The listbox stays in the markup while closed; only its class changes.
#[must_use]
pub fn render_markup(projection: &AriaProjection) -> String {
    let trigger = &projection.trigger;
    let mut out = String::new();

    out.push_str("<div class=\"dropdown\">\n");
    let _ = writeln!(
        out,
        "  <button type=\"button\" class=\"{}\" aria-haspopup=\"{}\" aria-expanded=\"{}\">{}</button>",
        trigger.class(),
        trigger.aria_haspopup(),
        trigger.aria_expanded(),
        trigger.inner_html(),
    );
    let _ = writeln!(
        out,
        "  <ul class=\"{}\" role=\"listbox\">",
        projection.listbox.class()
    );
    for option in &projection.options {
        let _ = writeln!(
            out,
            "    <li role=\"option\" aria-selected=\"{}\">{}</li>",
            option.aria_selected(),
            escape_html(&option.key),
        );
    }
    out.push_str("  </ul>\n</div>");
    out
}
