use crate::config::PageConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector`; an invalid selector yields none.
pub fn query_elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Like [`query_elements`] but keeps only elements with an inline style.
pub fn query_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_elements(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_display(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("display", value);
}

/// `window.innerWidth` in CSS px; 0 when unavailable.
#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current `location.hash`, empty when unavailable.
#[inline]
pub fn location_hash(window: &web::Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Run `handler` once the DOM is parsed. Runs immediately if that already happened,
/// which is the common case for a module loaded after the markup.
pub fn on_dom_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        handler();
        return;
    }
    let closure: wasm_bindgen::closure::Closure<dyn FnMut()> =
        wasm_bindgen::closure::Closure::once(handler);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Defaults plus overrides declared as data attributes on `<body>`.
pub fn page_config(document: &web::Document) -> PageConfig {
    let config = PageConfig::default();
    match document.body() {
        Some(body) => config.with_overrides(|name| body.get_attribute(name)),
        None => config,
    }
}
