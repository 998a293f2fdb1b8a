use crate::config::PageConfig;
use crate::constants::{
    CARD_SELECTOR, NAV_ACTIVE_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR, SPOTLIGHT_ELEMENT_ID,
};
use crate::dom;
use crate::events::{navigation, pointer, scroll};
use crate::links;
use crate::nav::NavLinks;
use crate::spotlight::Spotlight;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Owns every element the page behaviours act on. Built once at startup.
pub struct PageController {
    window: web::Window,
    document: web::Document,
    config: PageConfig,
    spotlight: Option<Rc<RefCell<Spotlight>>>,
    sections: Vec<web::Element>,
    nav: Rc<NavLinks>,
    cards: Vec<web::HtmlElement>,
    observer: Option<web::IntersectionObserver>,
}

impl PageController {
    pub fn new(window: web::Window, document: web::Document, config: PageConfig) -> Self {
        let spotlight = match dom::html_element_by_id(&document, SPOTLIGHT_ELEMENT_ID) {
            Some(el) => Some(Rc::new(RefCell::new(Spotlight::new(
                el,
                document.clone(),
                config.spotlight_min_width,
            )))),
            None => {
                log::warn!("[page] missing #{}; spotlight disabled", SPOTLIGHT_ELEMENT_ID);
                None
            }
        };
        let sections = dom::query_elements(&document, SECTION_SELECTOR);
        let nav = Rc::new(NavLinks::new(
            dom::query_elements(&document, NAV_LINK_SELECTOR),
            NAV_ACTIVE_CLASS,
        ));
        let cards = dom::query_html_elements(&document, CARD_SELECTOR);

        Self {
            window,
            document,
            config,
            spotlight,
            sections,
            nav,
            cards,
            observer: None,
        }
    }

    /// Install every listener. Call once.
    pub fn attach(&mut self) -> anyhow::Result<()> {
        if let Some(spotlight) = &self.spotlight {
            spotlight
                .borrow_mut()
                .evaluate(dom::viewport_width(&self.window));
            pointer::wire_resize(
                &self.window,
                spotlight.clone(),
                self.config.resize_debounce_ms,
            );
        }

        if !self.sections.is_empty() {
            self.observer = Some(scroll::wire_section_observer(
                &self.sections,
                self.nav.clone(),
                &self.config.observer_root_margin,
            )?);
        }
        navigation::wire_smooth_scroll(&self.window, &self.document, &self.nav);
        scroll::wire_page_ready(
            &self.window,
            &self.document,
            self.nav.clone(),
            self.config.default_section.clone(),
        );
        scroll::wire_hashchange(&self.window, self.nav.clone());

        pointer::wire_card_hover(&self.cards);
        let hardened = links::harden_external_links(&self.document);

        log::info!(
            "[page] attached: spotlight={} observing={} sections={} nav_links={} cards={} hardened_links={}",
            self.spotlight
                .as_ref()
                .map(|s| s.borrow().is_listening())
                .unwrap_or(false),
            self.observer.is_some(),
            self.sections.len(),
            self.nav.links().len(),
            self.cards.len(),
            hardened
        );
        Ok(())
    }

    pub fn active_section(&self) -> Option<String> {
        self.nav.active()
    }
}
