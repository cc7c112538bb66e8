use crate::dom::ViewNode;

const OPEN_CLASS: &str = "active";

pub struct MenuController<N: ViewNode> {
    button: N,
    menu: N,
}

impl<N: ViewNode> MenuController<N> {
    pub fn new(button: N, menu: N) -> Self {
        Self { button, menu }
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(OPEN_CLASS)
    }

    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.set_open(open);
        open
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    /// Returns true if the key closed the menu.
    pub fn handle_key(&self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    fn set_open(&self, open: bool) {
        self.menu.set_class(OPEN_CLASS, open);
        self.button.set_class(OPEN_CLASS, open);
    }
}

/// Last path segment, with the site root mapped to `index.html`.
pub fn page_name(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(name) => name,
    }
}

/// Marks the link pointing at the current page. Returns its position.
pub fn mark_active_link<N: ViewNode>(links: &[N], current_path: &str) -> Option<usize> {
    let current = page_name(current_path);
    let mut found = None;
    for (i, link) in links.iter().enumerate() {
        let is_current = link
            .attr("href")
            .map(|href| page_name(&href) == current)
            .unwrap_or(false);
        link.set_class(OPEN_CLASS, is_current);
        if is_current && found.is_none() {
            found = Some(i);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeNode;

    fn menu() -> (MenuController<FakeNode>, FakeNode, FakeNode) {
        let button = FakeNode::new();
        let nav = FakeNode::new();
        (MenuController::new(button.clone(), nav.clone()), button, nav)
    }

    #[test]
    fn toggle_opens_and_closes_both() {
        let (ctl, button, nav) = menu();
        assert!(ctl.toggle());
        assert!(button.has_class("active") && nav.has_class("active"));
        assert!(!ctl.toggle());
        assert!(!button.has_class("active") && !nav.has_class("active"));
    }

    #[test]
    fn close_is_idempotent() {
        let (ctl, button, nav) = menu();
        ctl.close();
        ctl.close();
        assert!(!ctl.is_open());
        assert!(!button.has_class("active") && !nav.has_class("active"));
    }

    #[test]
    fn escape_closes_open_menu_only() {
        let (ctl, _, _) = menu();
        assert!(!ctl.handle_key("Escape"));

        ctl.toggle();
        assert!(!ctl.handle_key("Enter"));
        assert!(ctl.is_open());
        assert!(ctl.handle_key("Escape"));
        assert!(!ctl.is_open());
    }

    #[test]
    fn page_name_handles_root_and_queries() {
        assert_eq!(page_name("/"), "index.html");
        assert_eq!(page_name(""), "index.html");
        assert_eq!(page_name("/about.html"), "about.html");
        assert_eq!(page_name("/site/case-studies.html?x=1#top"), "case-studies.html");
    }

    #[test]
    fn marks_only_the_current_link() {
        let links: Vec<FakeNode> = ["index.html", "case-studies.html", "about.html", "contact.html"]
            .iter()
            .map(|href| FakeNode::new().with_attr("href", href).with_class("active"))
            .collect();

        assert_eq!(mark_active_link(&links, "/about.html"), Some(2));
        let active: Vec<bool> = links.iter().map(|l| l.has_class("active")).collect();
        assert_eq!(active, vec![false, false, true, false]);

        assert_eq!(mark_active_link(&links, "/"), Some(0));
        assert_eq!(mark_active_link(&links, "/resume.html"), None);
        assert!(links.iter().all(|l| !l.has_class("active")));
    }
}
