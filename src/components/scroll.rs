use crate::dom::ViewNode;
use crate::platform::Viewport;

/// Strictly past the threshold; sitting exactly on it does not count.
pub fn is_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub to_top_visible: bool,
}

pub struct ScrollEffects<N: ViewNode, V: Viewport> {
    header: Option<N>,
    to_top: Option<N>,
    viewport: V,
    header_threshold: f64,
    to_top_threshold: f64,
}

impl<N: ViewNode, V: Viewport> ScrollEffects<N, V> {
    pub fn new(
        header: Option<N>,
        to_top: Option<N>,
        viewport: V,
        header_threshold: f64,
        to_top_threshold: f64,
    ) -> Self {
        Self {
            header,
            to_top,
            viewport,
            header_threshold,
            to_top_threshold,
        }
    }

    /// Recomputes both effects from the current scroll offset.
    pub fn update(&self) -> ScrollState {
        let offset = self.viewport.scroll_offset();
        let state = ScrollState {
            header_scrolled: is_past(offset, self.header_threshold),
            to_top_visible: is_past(offset, self.to_top_threshold),
        };
        if let Some(header) = &self.header {
            header.set_class("scrolled", state.header_scrolled);
        }
        if let Some(button) = &self.to_top {
            button.set_class("visible", state.to_top_visible);
        }
        state
    }

    pub fn scroll_to_top(&self) {
        self.viewport.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeNode;
    use crate::platform::fake::FixedViewport;

    fn effects() -> (ScrollEffects<FakeNode, FixedViewport>, FakeNode, FakeNode) {
        let header = FakeNode::new();
        let button = FakeNode::new();
        let fx = ScrollEffects::new(
            Some(header.clone()),
            Some(button.clone()),
            FixedViewport::default(),
            50.0,
            300.0,
        );
        (fx, header, button)
    }

    fn scroll(fx: &ScrollEffects<FakeNode, FixedViewport>, offset: f64) -> ScrollState {
        fx.viewport.offset.set(offset);
        fx.update()
    }

    #[test]
    fn header_boundary_is_exclusive() {
        let (fx, header, _) = effects();
        assert!(!scroll(&fx, 49.0).header_scrolled);
        assert!(!scroll(&fx, 50.0).header_scrolled);
        assert!(!header.has_class("scrolled"));
        assert!(scroll(&fx, 51.0).header_scrolled);
        assert!(header.has_class("scrolled"));
        assert!(!scroll(&fx, 30.0).header_scrolled);
        assert!(!header.has_class("scrolled"));
    }

    #[test]
    fn scroll_to_top_appears_past_300() {
        let (fx, _, button) = effects();
        scroll(&fx, 300.0);
        assert!(!button.has_class("visible"));
        let state = scroll(&fx, 301.0);
        assert_eq!(state, ScrollState { header_scrolled: true, to_top_visible: true });
        assert!(button.has_class("visible"));
    }

    #[test]
    fn scroll_to_top_resets_offset() {
        let (fx, _, button) = effects();
        scroll(&fx, 900.0);
        fx.scroll_to_top();
        assert!(fx.viewport.scrolled_to_top.get());
        fx.update();
        assert!(!button.has_class("visible"));
    }

    #[test]
    fn missing_elements_still_report_state() {
        let fx: ScrollEffects<FakeNode, _> =
            ScrollEffects::new(None, None, FixedViewport::default(), 50.0, 300.0);
        fx.viewport.offset.set(120.0);
        assert_eq!(fx.update(), ScrollState { header_scrolled: true, to_top_visible: false });
    }
}
