//! Ordered event dispatch without a real document.
//!
//! The simulator queues input events and processes them strictly first in,
//! first out. Each step runs one complete transition and records the ARIA
//! projection that results, so tests can assert on every intermediate render.
//!
//! # Example
//!
//! ```rust
//! use dropdown::{Dropdown, DropdownConfig, DropdownOption, InputEvent, Simulator};
//!
//! let dd = Dropdown::new(DropdownConfig::new(DropdownOption::from_keys(["A", "B"])));
//! let mut sim = Simulator::new(dd);
//! let trigger = sim.dropdown().region().trigger_path();
//!
//! sim.send(InputEvent::FocusIn(trigger));
//! sim.send(InputEvent::key("ArrowDown"));
//! sim.send(InputEvent::key("ArrowDown"));
//! assert_eq!(sim.run_until_empty(), 3);
//!
//! assert_eq!(sim.dropdown().active_index(), Some(1));
//! assert_eq!(sim.stats().transitions, 2);
//! ```

use std::collections::VecDeque;

use crate::aria::AriaProjection;
use crate::dropdown::Dropdown;
use crate::event::InputEvent;
use crate::state::Transition;

/// Counters collected while dispatching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Events taken off the queue.
    pub events: usize,
    /// Events that changed the state.
    pub transitions: usize,
    /// Events that changed nothing.
    pub ignored: usize,
}

/// One processed event and what it did.
#[derive(Debug, Clone)]
pub struct Step {
    /// The event as dispatched.
    pub event: InputEvent,
    /// The resulting transition, if any.
    pub transition: Option<Transition>,
    /// Projection after the event was handled.
    pub projection: AriaProjection,
}

/// FIFO driver around a [`Dropdown`].
#[derive(Debug)]
pub struct Simulator<T> {
    dropdown: Dropdown<T>,
    queue: VecDeque<InputEvent>,
    steps: Vec<Step>,
    stats: SimulationStats,
}

impl<T> Simulator<T> {
    /// Wraps a dropdown with an empty queue.
    #[must_use]
    pub fn new(dropdown: Dropdown<T>) -> Self {
        Self {
            dropdown,
            queue: VecDeque::new(),
            steps: Vec::new(),
            stats: SimulationStats::default(),
        }
    }

    /// Queues an event.
    pub fn send(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Queues several events in order.
    pub fn send_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.queue.extend(events);
    }

    /// Processes the oldest queued event. Returns `None` when the queue is empty.
    pub fn step(&mut self) -> Option<&Step> {
        let event = self.queue.pop_front()?;
        let transition = self.dropdown.update(&event);

        self.stats.events += 1;
        if transition.is_some() {
            self.stats.transitions += 1;
        } else {
            self.stats.ignored += 1;
        }

        self.steps.push(Step {
            event,
            transition,
            projection: self.dropdown.aria(),
        });
        self.steps.last()
    }

    /// Processes every queued event. Returns how many were processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while self.step().is_some() {
            processed += 1;
        }
        processed
    }

    /// Returns the dropdown.
    #[must_use]
    pub const fn dropdown(&self) -> &Dropdown<T> {
        &self.dropdown
    }

    /// Returns the dropdown for direct manipulation between steps.
    pub fn dropdown_mut(&mut self) -> &mut Dropdown<T> {
        &mut self.dropdown
    }

    /// Consumes the simulator, returning the dropdown.
    pub fn into_dropdown(self) -> Dropdown<T> {
        self.dropdown
    }

    /// Returns every processed step in dispatch order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the projection after the most recent step.
    #[must_use]
    pub fn last_projection(&self) -> Option<&AriaProjection> {
        self.steps.last().map(|s| &s.projection)
    }

    /// Returns the dispatch counters.
    #[must_use]
    pub const fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
