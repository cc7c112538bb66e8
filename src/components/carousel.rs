use crate::dom::ViewNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }
}

pub struct CarouselController<N: ViewNode> {
    items: Vec<N>,
    state: Carousel,
}

impl<N: ViewNode> CarouselController<N> {
    /// Shows the first item right away.
    pub fn new(items: Vec<N>) -> Self {
        let ctl = Self {
            state: Carousel::new(items.len()),
            items,
        };
        ctl.show(0);
        ctl
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn next(&mut self) -> usize {
        let index = self.state.next();
        self.show(index);
        index
    }

    pub fn prev(&mut self) -> usize {
        let index = self.state.prev();
        self.show(index);
        index
    }

    pub fn show(&self, index: usize) {
        for item in &self.items {
            item.set_class("active", false);
        }
        if let Some(item) = self.items.get(index) {
            item.set_class("active", true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeNode;

    fn three() -> (CarouselController<FakeNode>, Vec<FakeNode>) {
        let items: Vec<FakeNode> = (0..3).map(|_| FakeNode::new()).collect();
        (CarouselController::new(items.clone()), items)
    }

    fn active(items: &[FakeNode]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, n)| n.has_class("active"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn starts_on_first_item() {
        let (ctl, items) = three();
        assert_eq!(ctl.index(), 0);
        assert_eq!(active(&items), vec![0]);
    }

    #[test]
    fn next_wraps_after_last() {
        let (mut ctl, items) = three();
        assert_eq!(ctl.next(), 1);
        assert_eq!(active(&items), vec![1]);
        assert_eq!(ctl.next(), 2);
        assert_eq!(ctl.next(), 0);
        assert_eq!(active(&items), vec![0]);
    }

    #[test]
    fn prev_wraps_from_first() {
        let (mut ctl, items) = three();
        assert_eq!(ctl.prev(), 2);
        assert_eq!(active(&items), vec![2]);
        assert_eq!(ctl.prev(), 1);
    }

    #[test]
    fn show_clears_stale_active_items() {
        let items: Vec<FakeNode> = (0..3).map(|_| FakeNode::new().with_class("active")).collect();
        let mut ctl = CarouselController::new(items.clone());
        assert_eq!(active(&items), vec![0]);
        ctl.next();
        assert_eq!(active(&items), vec![1]);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut state = Carousel::new(0);
        assert_eq!(state.next(), 0);
        assert_eq!(state.prev(), 0);

        let mut ctl: CarouselController<FakeNode> = CarouselController::new(Vec::new());
        assert_eq!(ctl.next(), 0);
    }
}
