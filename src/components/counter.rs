//! Animated stats counters.

use crate::components::reveal::OnceTrigger;
#[cfg(test)]
use crate::components::reveal::TriggerState;
use crate::dom::ViewNode;
use crate::platform::Clock;

/// Leading decimal digits of `raw`, the way the page's `data-target`
/// values are written ("150", " 42 ", "98%").
pub fn parse_target(raw: &str) -> Option<u64> {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    start_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub value: u64,
    pub finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64, start_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms,
        }
    }

    /// Displayed value at `now_ms`: floor of the linear progress, never
    /// above the target, and exactly the target once finished.
    pub fn frame(&self, now_ms: f64) -> Frame {
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - self.start_ms) / self.duration_ms).max(0.0)
        };
        if progress >= 1.0 {
            return Frame {
                value: self.target,
                finished: true,
            };
        }
        let value = ((self.target as f64) * progress).floor() as u64;
        Frame {
            value: value.min(self.target),
            finished: false,
        }
    }
}

pub struct CounterController<N: ViewNode> {
    number: N,
    target: u64,
    duration_ms: f64,
    trigger: OnceTrigger,
    animation: Option<CounterAnimation>,
    shown: u64,
}

impl<N: ViewNode> CounterController<N> {
    /// None when the node carries no usable `data-target`.
    pub fn new(number: N, duration_ms: f64) -> Option<Self> {
        let target = number.data("target").as_deref().and_then(parse_target)?;
        let trigger = if number.has_class("animated") {
            OnceTrigger::done()
        } else {
            OnceTrigger::new()
        };
        Some(Self {
            number,
            target,
            duration_ms,
            trigger,
            animation: None,
            shown: 0,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> TriggerState {
        self.trigger.state()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    /// Handles an intersection report for the counter's card. Returns true
    /// when the animation started and the card should be unobserved.
    pub fn start<C: Clock>(&mut self, intersecting: bool, clock: &C) -> bool {
        if !self.trigger.observe(intersecting) {
            return false;
        }
        self.number.set_class("animated", true);
        self.animation = Some(CounterAnimation::new(self.target, self.duration_ms, clock.now_ms()));
        self.tick(clock);
        true
    }

    /// Paints one frame. Returns true while another frame is wanted.
    pub fn tick<C: Clock>(&mut self, clock: &C) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let frame = animation.frame(clock.now_ms());
        // Frame times never go backwards, but the display must not either.
        self.shown = self.shown.max(frame.value);
        self.number.set_text(&self.shown.to_string());
        if frame.finished {
            self.animation = None;
            self.trigger.finish();
            return false;
        }
        true
    }
}
