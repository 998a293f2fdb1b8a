use crate::constants::{
    CARD_OPACITY_HIDDEN, CARD_OPACITY_SHOWN, CARD_OPACITY_VAR, MOUSE_X_VAR, MOUSE_Y_VAR,
};
use crate::core::{px, Debouncer};
use crate::dom;
use crate::spotlight::Spotlight;
use crate::timer::WindowTimer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn write_pointer_vars(el: &web::HtmlElement, client_x: i32, client_y: i32) {
    dom::set_style_var(el, MOUSE_X_VAR, &px(client_x));
    dom::set_style_var(el, MOUSE_Y_VAR, &px(client_y));
}

/// Re-evaluate the spotlight after resizing settles for `delay_ms`.
pub fn wire_resize(window: &web::Window, spotlight: Rc<RefCell<Spotlight>>, delay_ms: u32) {
    let debouncer = Rc::new(RefCell::new(Debouncer::new(
        WindowTimer::new(window.clone()),
        delay_ms,
    )));

    let fire = {
        let debouncer = debouncer.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            debouncer.borrow_mut().settle();
            let width = dom::viewport_width(&window);
            spotlight.borrow_mut().evaluate(width);
        }) as Box<dyn FnMut()>)
    };
    debouncer
        .borrow_mut()
        .host_mut()
        .bind(fire.as_ref().unchecked_ref::<js_sys::Function>().clone());
    fire.forget();

    let on_resize = Closure::wrap(Box::new(move || {
        let mut d = debouncer.borrow_mut();
        if d.is_pending() {
            log::trace!("[resize] restarting {}ms quiet period", d.delay_ms());
        }
        d.trigger();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

pub fn wire_card_hover(cards: &[web::HtmlElement]) {
    for card in cards {
        wire_card_opacity(card, "mouseenter", CARD_OPACITY_SHOWN);
        wire_card_opacity(card, "mouseleave", CARD_OPACITY_HIDDEN);
    }
}

fn wire_card_opacity(card: &web::HtmlElement, event: &str, opacity: &'static str) {
    let target = card.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::set_style_var(&target, CARD_OPACITY_VAR, opacity);
    }) as Box<dyn FnMut()>);
    _ = card.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fixture::{style_var, Fixture};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn pointer_vars_equal_client_coordinates() {
        let f = Fixture::new(r#"<div id="pointer-vars"></div>"#);
        let el = f.html("pointer-vars");
        write_pointer_vars(&el, 321, 45);
        assert_eq!(style_var(&el, MOUSE_X_VAR), "321px");
        assert_eq!(style_var(&el, MOUSE_Y_VAR), "45px");
        write_pointer_vars(&el, 0, 1079);
        assert_eq!(style_var(&el, MOUSE_X_VAR), "0px");
        assert_eq!(style_var(&el, MOUSE_Y_VAR), "1079px");
    }

    #[wasm_bindgen_test]
    fn card_hover_toggles_opacity() {
        let f = Fixture::new(
            r#"<div class="experience-card" id="card-exp"></div>
               <div class="project-card" id="card-proj"></div>"#,
        );
        let cards = [f.html("card-exp"), f.html("card-proj")];
        wire_card_hover(&cards);

        let enter = web::Event::new("mouseenter").expect("event");
        _ = cards[0].dispatch_event(&enter);
        assert_eq!(style_var(&cards[0], CARD_OPACITY_VAR), CARD_OPACITY_SHOWN);
        assert_eq!(style_var(&cards[1], CARD_OPACITY_VAR), "");

        let leave = web::Event::new("mouseleave").expect("event");
        _ = cards[0].dispatch_event(&leave);
        assert_eq!(style_var(&cards[0], CARD_OPACITY_VAR), CARD_OPACITY_HIDDEN);
    }
}
