//! Fire-once visibility triggers for intersection-driven effects.

use crate::dom::ViewNode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Pending,
    /// Fired; the element must be unobserved now.
    Triggered,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceTrigger {
    state: TriggerState,
}

impl OnceTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts already finished, for elements that ran before.
    pub fn done() -> Self {
        Self {
            state: TriggerState::Done,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Feeds one intersection report. True exactly once: on the first
    /// visible report while pending.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.state == TriggerState::Pending {
            self.state = TriggerState::Triggered;
            return true;
        }
        false
    }

    pub fn finish(&mut self) {
        if self.state == TriggerState::Triggered {
            self.state = TriggerState::Done;
        }
    }
}

/// Adds `animated` to an element the first time it scrolls into view.
pub struct Reveal<N: ViewNode> {
    node: N,
    trigger: OnceTrigger,
}

impl<N: ViewNode> Reveal<N> {
    pub fn new(node: N) -> Self {
        Self {
            node,
            trigger: OnceTrigger::new(),
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    /// Returns true when the caller should stop observing the element.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        if !self.trigger.observe(intersecting) {
            return false;
        }
        self.node.set_class("animated", true);
        self.trigger.finish();
        true
    }

    #[cfg(test)]
    pub fn state(&self) -> TriggerState {
        self.trigger.state()
    }
}
