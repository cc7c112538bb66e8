use crate::dom::ViewNode;
use crate::platform::KeyValueStore;
use log::{debug, warn};

pub const THEME_ATTR: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Moon while light (offers dark), sun while dark.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

pub struct ThemeController<N: ViewNode, S: KeyValueStore> {
    root: N,
    icon: Option<N>,
    store: S,
    storage_key: String,
}

impl<N: ViewNode, S: KeyValueStore> ThemeController<N, S> {
    pub fn new(root: N, icon: Option<N>, store: S, storage_key: impl Into<String>) -> Self {
        Self {
            root,
            icon,
            store,
            storage_key: storage_key.into(),
        }
    }

    /// Syncs the icon with the root attribute. Pages normally set the
    /// attribute inline before first paint; if one didn't, the stored
    /// preference is applied here.
    pub fn init(&self) -> Theme {
        if self.root.attr(THEME_ATTR).as_deref().and_then(Theme::parse).is_none() {
            let stored = self
                .store
                .get(&self.storage_key)
                .as_deref()
                .and_then(Theme::parse)
                .unwrap_or(Theme::Light);
            debug!("No inline theme, applying {}", stored.as_str());
            self.root.set_attr(THEME_ATTR, stored.as_str());
        }
        let theme = self.current();
        self.update_icon(theme);
        theme
    }

    pub fn current(&self) -> Theme {
        // Anything but an explicit "dark" reads as light.
        match self.root.attr(THEME_ATTR).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.root.set_attr(THEME_ATTR, next.as_str());
        if let Err(e) = self.store.set(&self.storage_key, next.as_str()) {
            warn!("Theme not persisted, keeping it for this session: {}", e);
        }
        self.update_icon(next);
        next
    }

    fn update_icon(&self, theme: Theme) {
        if let Some(icon) = &self.icon {
            icon.set_text(theme.icon());
        }
    }
}
