use crate::dom::ViewNode;

pub const SHARE_LABEL: &str = "Share";
pub const COPIED_LABEL: &str = "✓ Link Copied";

/// The shared link is the current page address with the button's
/// `data-url` appended verbatim.
pub fn share_url(page_href: &str, suffix: Option<&str>) -> String {
    format!("{}{}", page_href, suffix.unwrap_or_default())
}

/// How the clipboard fallback went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyAttempt {
    /// `writeText` accepted the URL.
    Started,
    /// `writeText` threw.
    Failed,
    /// No clipboard API on this page.
    Unavailable,
}

/// Label feedback for the clipboard fallback.
pub struct ShareLabel<N: ViewNode> {
    button: N,
}

impl<N: ViewNode> ShareLabel<N> {
    pub fn new(button: N) -> Self {
        Self { button }
    }

    pub fn title(&self) -> String {
        self.button.data("title").unwrap_or_default()
    }

    pub fn url(&self, page_href: &str) -> String {
        share_url(page_href, self.button.data("url").as_deref())
    }

    /// Shows the copied label only when a copy actually started. Returns
    /// true when the caller should schedule [`ShareLabel::reset`].
    pub fn after_copy(&self, attempt: CopyAttempt) -> bool {
        if attempt != CopyAttempt::Started {
            return false;
        }
        self.copied();
        true
    }

    pub fn copied(&self) {
        self.button.set_text(COPIED_LABEL);
    }

    pub fn reset(&self) {
        self.button.set_text(SHARE_LABEL);
    }
}
