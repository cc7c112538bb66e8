use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline JSON block that overrides the defaults below.
pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";

#[cfg(debug_assertions)]
pub fn default_log_level() -> Level {
    Level::Debug // Verbose wiring logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme_storage_key: String,
    pub header_threshold: f64,
    pub scroll_top_threshold: f64,
    pub counter_duration_ms: f64,
    pub share_feedback_ms: u32,
    pub log_level: Option<String>,
    pub selectors: Selectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            header_threshold: 50.0,
            scroll_top_threshold: 300.0,
            counter_duration_ms: 2000.0,
            share_feedback_ms: 2000,
            log_level: None,
            selectors: Selectors::default(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the inline config block if the page has one.
    pub fn load(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed #{}: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or_else(default_log_level)
    }
}

/// CSS selectors and ids the page markup is expected to provide.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub header_id: String,
    pub theme_toggle_id: String,
    pub theme_icon: String,
    pub hamburger_id: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub scroll_to_top_id: String,
    pub scroll_indicator: String,
    pub stats_dashboard: String,
    pub stat_card: String,
    pub stat_number: String,
    pub filter_button: String,
    pub case_card: String,
    pub testimonial_item: String,
    pub carousel_prev: String,
    pub carousel_next: String,
    pub form: String,
    pub form_fields: String,
    pub share_button: String,
    pub reveal_targets: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header_id: "main-header".to_string(),
            theme_toggle_id: "theme-toggle".to_string(),
            theme_icon: ".theme-icon".to_string(),
            hamburger_id: "hamburger".to_string(),
            nav_menu: ".nav-menu".to_string(),
            nav_links: ".nav-menu a".to_string(),
            scroll_to_top_id: "scroll-to-top".to_string(),
            scroll_indicator: ".scroll-indicator".to_string(),
            stats_dashboard: ".stats-dashboard".to_string(),
            stat_card: ".stat-card".to_string(),
            stat_number: ".stat-number".to_string(),
            filter_button: ".filter-btn".to_string(),
            case_card: ".case-card".to_string(),
            testimonial_item: ".testimonial-item".to_string(),
            carousel_prev: ".carousel-prev".to_string(),
            carousel_next: ".carousel-next".to_string(),
            form: "form".to_string(),
            form_fields: "input, textarea".to_string(),
            share_button: ".share-btn".to_string(),
            reveal_targets: "section, .case-card, .expertise-card".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let raw = r##"{"header_threshold": 80, "selectors": {"form": "#contact"}}"##;
        let config = Config::from_json(raw).expect("valid config");
        assert_eq!(config.header_threshold, 80.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert_eq!(config.selectors.form, "#contact");
        assert_eq!(config.selectors.case_card, ".case-card");
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{not json").is_err());
    }

    #[test]
    fn log_level_parses_or_falls_back() {
        let mut config = Config::default();
        config.log_level = Some("warn".to_string());
        assert_eq!(config.level(), Level::Warn);

        config.log_level = Some("loud".to_string());
        assert_eq!(config.level(), default_log_level());
    }
}
