use crate::core::fragment_id;
use crate::nav::NavLinks;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Smooth-scroll in-page nav links and record the fragment in history.
pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document, nav: &NavLinks) {
    for link in nav.links() {
        let anchor = link.clone();
        let wnd = window.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            if !href.starts_with('#') {
                return;
            }
            ev.prevent_default();
            scroll_to_fragment(&wnd, &doc, &href);
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Returns whether a target was found. A bare `#` or unknown id scrolls nowhere.
pub fn scroll_to_fragment(window: &web::Window, document: &web::Document, href: &str) -> bool {
    let Some(target) = fragment_id(href).and_then(|id| document.get_element_by_id(id)) else {
        log::debug!("[nav] no target for {:?}", href);
        return false;
    };

    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);

    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
                log::warn!("[nav] pushState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("[nav] history unavailable: {:?}", e),
    }
    true
}
