use crate::constants::{DISPLAY_HIDDEN, DISPLAY_SHOWN};
use crate::core::SpotlightGate;
use crate::dom;
use crate::events::pointer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-following highlight. Owns its element and the `mousemove` closure so
/// the listener can be detached again when the viewport narrows.
pub struct Spotlight {
    element: web::HtmlElement,
    document: web::Document,
    gate: SpotlightGate,
    on_move: Closure<dyn FnMut(web::MouseEvent)>,
    listening: bool,
}

impl Spotlight {
    pub fn new(element: web::HtmlElement, document: web::Document, min_width: f64) -> Self {
        let target = element.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            pointer::write_pointer_vars(&target, ev.client_x(), ev.client_y());
        }) as Box<dyn FnMut(_)>);
        Self {
            element,
            document,
            gate: SpotlightGate::new(min_width),
            on_move,
            listening: false,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn attach(&mut self) {
        if self.listening {
            return;
        }
        match self
            .document
            .add_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
        {
            Ok(()) => self.listening = true,
            Err(e) => log::warn!("[spotlight] attach failed: {:?}", e),
        }
    }

    pub fn detach(&mut self) {
        if !self.listening {
            return;
        }
        _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        self.listening = false;
    }

    /// Apply the width policy; a no-op unless the mode changes.
    ///
    /// The mode is only committed once applied, so a failed attach is retried
    /// on the next evaluation.
    pub fn evaluate(&mut self, viewport_width: f64) {
        let Some(mode) = self.gate.next_mode(viewport_width) else {
            return;
        };
        let previous = self.gate.mode();
        if mode.listens() {
            self.attach();
            if !self.listening {
                dom::set_display(&self.element, DISPLAY_HIDDEN);
                return;
            }
            dom::set_display(&self.element, DISPLAY_SHOWN);
        } else {
            self.detach();
            dom::set_display(&self.element, DISPLAY_HIDDEN);
        }
        self.gate.commit(mode);
        log::debug!(
            "[spotlight] width={} min={} {:?} -> {:?}",
            viewport_width,
            self.gate.min_width(),
            previous,
            mode
        );
    }
}

impl Drop for Spotlight {
    fn drop(&mut self) {
        self.detach();
    }
}
