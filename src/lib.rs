#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod controller;
mod core;
mod dom;
mod events;
mod links;
mod nav;
mod spotlight;
mod timer;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    // Keeps the controller (and the observer it holds) alive for the page lifetime.
    static CONTROLLER: RefCell<Option<controller::PageController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = dom::page_config(&document);
    greet(&config);

    let mut page = controller::PageController::new(window, document, config);
    page.attach()?;
    log::debug!("[page] initial active section {:?}", page.active_section());
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn greet(config: &config::PageConfig) {
    web::console::log_2(
        &JsValue::from_str(&format!("%c{}", constants::GREETING_TEXT)),
        &JsValue::from_str(constants::GREETING_STYLE),
    );
    web::console::log_2(
        &JsValue::from_str(&format!("%c{}", config.contact_line())),
        &JsValue::from_str(constants::CONTACT_STYLE),
    );
}
