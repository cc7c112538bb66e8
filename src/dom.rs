//! Element access used by every controller.
//!
//! Controllers never query the document themselves. They are handed the
//! nodes they manage as [`ViewNode`] values: `web_sys::HtmlElement` in the
//! browser, [`fake::FakeNode`] in tests.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

pub trait ViewNode {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, on: bool);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    /// Reads a `data-*` attribute by its camel-cased dataset key.
    fn data(&self, key: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
    /// Current value of a form control; empty for anything else.
    fn value(&self) -> String;
}

impl ViewNode for HtmlElement {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let _ = self.class_list().toggle_with_force(class, on);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn data(&self, key: &str) -> Option<String> {
        self.dataset().get(key)
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn value(&self) -> String {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_within(parent: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all_within(parent: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg(test)]
pub mod fake {
    use super::ViewNode;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    #[derive(Default)]
    struct State {
        classes: BTreeSet<String>,
        text: String,
        attrs: BTreeMap<String, String>,
        data: BTreeMap<String, String>,
        style: BTreeMap<String, String>,
        value: String,
    }

    /// In-memory element. Clones share state, so a test can keep a handle
    /// to a node it gave away to a controller.
    #[derive(Clone, Default)]
    pub struct FakeNode(Rc<RefCell<State>>);

    impl FakeNode {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_class(self, class: &str) -> Self {
            self.set_class(class, true);
            self
        }

        pub fn with_text(self, text: &str) -> Self {
            self.set_text(text);
            self
        }

        pub fn with_attr(self, name: &str, value: &str) -> Self {
            self.set_attr(name, value);
            self
        }

        pub fn with_data(self, key: &str, value: &str) -> Self {
            self.0.borrow_mut().data.insert(key.to_string(), value.to_string());
            self
        }

        pub fn set_value(&self, value: &str) {
            self.0.borrow_mut().value = value.to_string();
        }

        pub fn style(&self, property: &str) -> Option<String> {
            self.0.borrow().style.get(property).cloned()
        }
    }

    impl ViewNode for FakeNode {
        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().classes.contains(class)
        }

        fn set_class(&self, class: &str, on: bool) {
            let mut state = self.0.borrow_mut();
            if on {
                state.classes.insert(class.to_string());
            } else {
                state.classes.remove(class);
            }
        }

        fn text(&self) -> String {
            self.0.borrow().text.clone()
        }

        fn set_text(&self, text: &str) {
            self.0.borrow_mut().text = text.to_string();
        }

        fn attr(&self, name: &str) -> Option<String> {
            self.0.borrow().attrs.get(name).cloned()
        }

        fn set_attr(&self, name: &str, value: &str) {
            self.0.borrow_mut().attrs.insert(name.to_string(), value.to_string());
        }

        fn data(&self, key: &str) -> Option<String> {
            self.0.borrow().data.get(key).cloned()
        }

        fn set_style(&self, property: &str, value: &str) {
            self.0.borrow_mut().style.insert(property.to_string(), value.to_string());
        }

        fn value(&self) -> String {
            self.0.borrow().value.clone()
        }
    }
}
