//! Browser globals behind small traits: local storage, the window scroll
//! offset and the clock.

use crate::error::UiError;
use web_sys::{ScrollBehavior, ScrollToOptions, Storage, Window};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

pub trait Viewport {
    fn scroll_offset(&self) -> f64;
    fn scroll_to_top(&self);
}

pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `window.localStorage`, or nothing when storage is disabled.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| UiError::Storage("localStorage is disabled".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))
    }
}

pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `performance.now()`, falling back to `Date.now()` without a
/// performance object.
pub struct PerformanceClock {
    window: Window,
}

impl PerformanceClock {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(web_sys::js_sys::Date::now)
    }
}
