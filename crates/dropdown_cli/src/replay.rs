//! Script replay and step reports.

use std::fmt;

use dropdown::script::parse_script;
use dropdown::{Dropdown, Simulator, Transition};
use serde::Serialize;
use tracing::info;

/// The observable outcome of one script step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// One-based step number.
    pub step: usize,
    /// Script line the event came from.
    pub line: usize,
    /// The script text of the event.
    pub event: String,
    /// The state change the event caused, if any.
    pub transition: Option<Transition>,
    /// `aria-expanded` of the trigger.
    pub expanded: bool,
    /// Highlighted option.
    pub active: Option<usize>,
    /// Committed option.
    pub selected: Option<usize>,
    /// Trigger label.
    pub label: String,
}

fn index(i: Option<usize>) -> String {
    i.map_or_else(|| "-".to_string(), |i| i.to_string())
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} expanded={} active={} selected={} label={:?}",
            self.step,
            self.event,
            self.expanded,
            index(self.active),
            index(self.selected),
            self.label,
        )
    }
}

/// Replays `script` against `widget`, returning one report per event.
///
/// Parsing happens up front, so a bad line fails the run before any event
/// is dispatched.
pub fn replay<T>(
    widget: Dropdown<T>,
    script: &str,
) -> dropdown::Result<(Vec<StepReport>, Dropdown<T>)> {
    let events = parse_script(script, widget.region())?;
    let lines: Vec<&str> = script.lines().collect();
    let mut sim = Simulator::new(widget);
    let mut reports = Vec::with_capacity(events.len());

    for (i, scripted) in events.into_iter().enumerate() {
        sim.send(scripted.event);
        let Some(step) = sim.step() else {
            break;
        };
        let transition = step.transition;
        let label = step.projection.trigger.label.text().to_string();
        let state = sim.dropdown().state();
        reports.push(StepReport {
            step: i + 1,
            line: scripted.line,
            event: lines
                .get(scripted.line - 1)
                .map_or_else(String::new, |l| l.trim().to_string()),
            transition,
            expanded: state.is_open,
            active: state.active_index,
            selected: state.selected_index,
            label,
        });
    }

    let stats = sim.stats();
    info!(
        events = stats.events,
        transitions = stats.transitions,
        ignored = stats.ignored,
        "replay finished"
    );
    Ok((reports, sim.into_dropdown()))
}
