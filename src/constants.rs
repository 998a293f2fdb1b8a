/// DOM contract and interaction tuning constants.
///
/// The page markup is expected to provide the ids, selectors and CSS custom
/// properties named here; the stylesheet reads the variables we write.
// Spotlight
pub const SPOTLIGHT_ELEMENT_ID: &str = "spotlight";
pub const SPOTLIGHT_MIN_VIEWPORT_WIDTH: f64 = 1024.0; // enabled strictly above this width
pub const MOUSE_X_VAR: &str = "--mouse-x";
pub const MOUSE_Y_VAR: &str = "--mouse-y";
pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

// Resize handling
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// Scroll-spy navigation
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_ACTIVE_CLASS: &str = "active";
// Activation band: 20% down from the top, bottom 60% ignored
pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -60% 0px";
pub const OBSERVER_THRESHOLD: f64 = 0.0;
pub const DEFAULT_SECTION_ID: &str = "about";

// Cards
pub const CARD_SELECTOR: &str = ".experience-card, .project-card";
pub const CARD_OPACITY_VAR: &str = "--card-opacity";
pub const CARD_OPACITY_SHOWN: &str = "1";
pub const CARD_OPACITY_HIDDEN: &str = "0";

// External links
pub const EXTERNAL_LINK_SELECTOR: &str = "a[target=\"_blank\"]";

// Page load
pub const BODY_LOADED_CLASS: &str = "loaded";

// Config overrides read from <body> data attributes
pub const ATTR_SPOTLIGHT_MIN_WIDTH: &str = "data-spotlight-min-width";
pub const ATTR_RESIZE_DEBOUNCE_MS: &str = "data-resize-debounce-ms";
pub const ATTR_DEFAULT_SECTION: &str = "data-default-section";
pub const ATTR_CONTACT_EMAIL: &str = "data-contact-email";

// Console greeting
pub const GREETING_TEXT: &str = "👋 Hello, curious developer!";
pub const GREETING_STYLE: &str = "color: #5eead4; font-size: 20px; font-weight: bold;";
pub const CONTACT_STYLE: &str = "color: #94a3b8; font-size: 14px;";
