use crate::dom::ViewNode;

pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Error,
    Valid,
}

/// Presence-only feedback for one form field.
pub struct FieldFeedback<N: ViewNode> {
    field: N,
}

impl<N: ViewNode> FieldFeedback<N> {
    pub fn new(field: N) -> Self {
        Self { field }
    }

    pub fn on_blur(&self) {
        self.field.set_class("error", !is_filled(&self.field.value()));
    }

    pub fn on_input(&self) {
        if is_filled(&self.field.value()) {
            self.field.set_class("error", false);
            self.field.set_class("valid", true);
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> FieldState {
        if self.field.has_class("error") {
            FieldState::Error
        } else if self.field.has_class("valid") {
            FieldState::Valid
        } else {
            FieldState::Untouched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeNode;

    #[test]
    fn whitespace_is_empty() {
        assert!(!is_filled(""));
        assert!(!is_filled(" \t\n"));
        assert!(is_filled(" x "));
    }

    #[test]
    fn blur_on_empty_field_marks_error() {
        let node = FakeNode::new();
        let field = FieldFeedback::new(node.clone());
        node.set_value(" ");
        field.on_blur();
        assert_eq!(field.state(), FieldState::Error);
    }

    #[test]
    fn input_on_whitespace_is_not_valid() {
        let node = FakeNode::new();
        let field = FieldFeedback::new(node.clone());
        node.set_value(" ");
        field.on_input();
        assert_eq!(field.state(), FieldState::Untouched);
        assert!(!node.has_class("valid"));
    }

    #[test]
    fn typing_clears_error_and_marks_valid() {
        let node = FakeNode::new();
        let field = FieldFeedback::new(node.clone());
        field.on_blur();
        assert_eq!(field.state(), FieldState::Error);

        node.set_value("Jane Doe");
        field.on_input();
        assert!(!node.has_class("error"));
        assert_eq!(field.state(), FieldState::Valid);
    }

    #[test]
    fn blur_on_filled_field_clears_error_only() {
        let node = FakeNode::new().with_class("error");
        let field = FieldFeedback::new(node.clone());
        node.set_value("jane@example.com");
        field.on_blur();
        assert!(!node.has_class("error"));
        assert!(!node.has_class("valid"));
    }
}
