use crate::constants::{BODY_LOADED_CLASS, OBSERVER_THRESHOLD};
use crate::core::{fragment_id, initial_section, topmost_visible, SectionSighting};
use crate::dom;
use crate::nav::NavLinks;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every section and highlight the topmost one crossing the activation band.
pub fn wire_section_observer(
    sections: &[web::Element],
    nav: Rc<NavLinks>,
    root_margin: &str,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let sightings: Vec<SectionSighting> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|entry| SectionSighting {
                    id: entry.target().id(),
                    top: entry.bounding_client_rect().top(),
                    intersecting: entry.is_intersecting(),
                })
                .collect();
            if let Some(id) = topmost_visible(&sightings) {
                nav.highlight(id);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for section in sections {
        observer.observe(section);
    }
    Ok(observer)
}

/// Direct fragment navigation updates the active link regardless of scroll.
pub fn wire_hashchange(window: &web::Window, nav: Rc<NavLinks>) {
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hash = dom::location_hash(&wnd);
        if let Some(id) = fragment_id(&hash) {
            nav.highlight(id);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Mark the body as loaded and pick the initial active link.
pub fn wire_page_ready(
    window: &web::Window,
    document: &web::Document,
    nav: Rc<NavLinks>,
    default_section: String,
) {
    let wnd = window.clone();
    let doc = document.clone();
    dom::on_dom_ready(document, move || {
        if let Some(body) = doc.body() {
            _ = body.class_list().add_1(BODY_LOADED_CLASS);
        }
        let hash = dom::location_hash(&wnd);
        nav.highlight(initial_section(&hash, &default_section));
    });
}
