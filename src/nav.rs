use crate::core::NavIndex;
use std::cell::RefCell;
use web_sys as web;

/// The page's nav links together with their active-link bookkeeping.
pub struct NavLinks {
    links: Vec<web::Element>,
    index: RefCell<NavIndex>,
    active_class: &'static str,
}

impl NavLinks {
    pub fn new(links: Vec<web::Element>, active_class: &'static str) -> Self {
        let index = NavIndex::new(
            links
                .iter()
                .map(|link| link.get_attribute("href").unwrap_or_default()),
        );
        Self {
            links,
            index: RefCell::new(index),
            active_class,
        }
    }

    pub fn links(&self) -> &[web::Element] {
        &self.links
    }

    pub fn active(&self) -> Option<String> {
        self.index.borrow().active().map(str::to_string)
    }

    /// Mark the link targeting `section_id` and clear every other one.
    pub fn highlight(&self, section_id: &str) {
        let marks = self.index.borrow_mut().activate(section_id);
        for (link, on) in self.links.iter().zip(marks) {
            let cl = link.class_list();
            if on {
                _ = cl.add_1(self.active_class);
            } else {
                _ = cl.remove_1(self.active_class);
            }
        }
        log::debug!("[nav] active section {:?}", section_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BODY_LOADED_CLASS, NAV_ACTIVE_CLASS};
    use crate::dom::fixture::Fixture;
    use crate::events::scroll;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;

    const NAV_MARKUP: &str = r##"
        <a class="nav-link" id="nl-about" href="#about">About</a>
        <a class="nav-link" id="nl-experience" href="#experience">Experience</a>
        <a class="nav-link" id="nl-projects" href="#projects">Projects</a>"##;

    fn nav_links(f: &Fixture) -> NavLinks {
        let links = ["nl-about", "nl-experience", "nl-projects"]
            .iter()
            .map(|id| f.element(id))
            .collect();
        NavLinks::new(links, NAV_ACTIVE_CLASS)
    }

    fn active_ids(f: &Fixture) -> Vec<&'static str> {
        ["nl-about", "nl-experience", "nl-projects"]
            .into_iter()
            .filter(|id| f.element(id).class_list().contains(NAV_ACTIVE_CLASS))
            .collect()
    }

    #[wasm_bindgen_test]
    fn highlight_marks_a_single_link() {
        let f = Fixture::new(NAV_MARKUP);
        let nav = nav_links(&f);
        nav.highlight("projects");
        assert_eq!(active_ids(&f), ["nl-projects"]);
        nav.highlight("about");
        assert_eq!(active_ids(&f), ["nl-about"]);
        nav.highlight("contact");
        assert!(active_ids(&f).is_empty());
    }

    #[wasm_bindgen_test]
    fn page_ready_uses_the_url_fragment() {
        let f = Fixture::new(NAV_MARKUP);
        let before = f.href();
        f.replace_url("#projects");
        let nav = Rc::new(nav_links(&f));
        scroll::wire_page_ready(&f.window, &f.document, nav.clone(), "about".to_string());
        assert_eq!(active_ids(&f), ["nl-projects"]);
        assert_eq!(nav.active().as_deref(), Some("projects"));
        let body = f.document.body().expect("body");
        assert!(body.class_list().contains(BODY_LOADED_CLASS));
        f.replace_url(&before);
    }

    #[wasm_bindgen_test]
    fn page_ready_without_fragment_marks_the_default() {
        let f = Fixture::new(NAV_MARKUP);
        let before = f.href();
        let bare = before.split('#').next().unwrap_or_default().to_string();
        f.replace_url(&bare);
        let nav = Rc::new(nav_links(&f));
        scroll::wire_page_ready(&f.window, &f.document, nav, "about".to_string());
        assert_eq!(active_ids(&f), ["nl-about"]);
        f.replace_url(&before);
    }
}
