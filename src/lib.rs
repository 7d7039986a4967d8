#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod core;
mod dom;
mod events;
mod form;
mod load;
mod nav;
mod reveal;
mod scroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no window/document");
        return Ok(());
    };
    load::hide_body_until_loaded(&document);

    if dom::ready_state(&document).as_deref() == Some("loading") {
        dom::add_listener(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::wire_mobile_toggle(&document);
    nav::wire_nav_links(&document);
    scroll::wire_scroll_effects(&window, &document);
    form::wire_contact_form(&document);

    events::wire_video_cards(&document);
    events::wire_contact_items(&document);
    events::wire_card_hover(&document);
    events::wire_keyboard_navigation(&document);

    load::wire_load_handlers(&window, &document);
    load::wire_resource_error_logging(&window);

    // Reveals last: a failing observer must not leave the rest unwired.
    if let Err(e) = reveal::wire_entrance_animation(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    Ok(())
}

/// Switch the visible section. Exposed for inline `onclick="showPage('id')"`.
#[wasm_bindgen(js_name = showPage)]
pub fn show_page(section_id: &str) {
    nav::show_section(section_id);
}

#[wasm_bindgen(js_name = currentPage)]
pub fn current_page() -> String {
    nav::current_section()
}
