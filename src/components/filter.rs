use crate::dom::ViewNode;

pub const ALL: &str = "all";

pub fn matches_filter(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

pub struct CaseFilter<N: ViewNode> {
    buttons: Vec<N>,
    cards: Vec<N>,
}

impl<N: ViewNode> CaseFilter<N> {
    pub fn new(buttons: Vec<N>, cards: Vec<N>) -> Self {
        Self { buttons, cards }
    }

    /// Activates button `index` and re-filters every card. Returns the
    /// number of visible cards, or None for an unknown button.
    pub fn select(&self, index: usize) -> Option<usize> {
        let button = self.buttons.get(index)?;
        for b in &self.buttons {
            b.set_class("active", false);
        }
        button.set_class("active", true);

        let filter = button.data("filter").unwrap_or_else(|| ALL.to_string());
        Some(self.apply(&filter))
    }

    pub fn apply(&self, filter: &str) -> usize {
        let mut visible = 0;
        for card in &self.cards {
            if matches_filter(filter, card.data("category").as_deref()) {
                card.set_style("display", "block");
                card.set_style("animation", "fadeIn 0.3s ease-out");
                visible += 1;
            } else {
                card.set_style("display", "none");
            }
        }
        visible
    }
}
