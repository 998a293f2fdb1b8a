use crate::constants::{
    ATTR_CONTACT_EMAIL, ATTR_DEFAULT_SECTION, ATTR_RESIZE_DEBOUNCE_MS, ATTR_SPOTLIGHT_MIN_WIDTH,
    DEFAULT_SECTION_ID, OBSERVER_ROOT_MARGIN, RESIZE_DEBOUNCE_MS, SPOTLIGHT_MIN_VIEWPORT_WIDTH,
};

/// Runtime configuration for the page controller.
///
/// Defaults come from `constants.rs`; the page may override a few of them
/// through data attributes on `<body>` (see [`PageConfig::with_overrides`]).
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Spotlight is enabled only when the viewport is wider than this (CSS px).
    pub spotlight_min_width: f64,
    /// Quiet period after the last resize before the spotlight is re-evaluated.
    pub resize_debounce_ms: u32,
    /// Section highlighted at load when the URL carries no fragment.
    pub default_section: String,
    pub observer_root_margin: String,
    pub contact_email: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            spotlight_min_width: SPOTLIGHT_MIN_VIEWPORT_WIDTH,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            default_section: DEFAULT_SECTION_ID.to_string(),
            observer_root_margin: OBSERVER_ROOT_MARGIN.to_string(),
            contact_email: None,
        }
    }
}

impl PageConfig {
    /// Apply overrides found through `lookup` (attribute name -> raw value).
    ///
    /// Invalid values are logged and the current value is kept.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ATTR_SPOTLIGHT_MIN_WIDTH) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => self.spotlight_min_width = v,
                _ => log::warn!("[config] ignoring {}={:?}", ATTR_SPOTLIGHT_MIN_WIDTH, raw),
            }
        }
        if let Some(raw) = lookup(ATTR_RESIZE_DEBOUNCE_MS) {
            match raw.trim().parse::<u32>() {
                Ok(v) => self.resize_debounce_ms = v,
                Err(_) => log::warn!("[config] ignoring {}={:?}", ATTR_RESIZE_DEBOUNCE_MS, raw),
            }
        }
        if let Some(raw) = lookup(ATTR_DEFAULT_SECTION) {
            let id = raw.trim().trim_start_matches('#');
            if id.is_empty() {
                log::warn!("[config] ignoring empty {}", ATTR_DEFAULT_SECTION);
            } else {
                self.default_section = id.to_string();
            }
        }
        if let Some(raw) = lookup(ATTR_CONTACT_EMAIL) {
            let email = raw.trim();
            if !email.is_empty() {
                self.contact_email = Some(email.to_string());
            }
        }
        self
    }

    pub fn contact_line(&self) -> String {
        match &self.contact_email {
            Some(email) => format!("Interested in working together? Reach out at {}", email),
            None => "Interested in working together? Say hello via the contact links.".to_string(),
        }
    }
}
