use crate::core::constants::{BODY_FADE_TRANSITION, HERO_ANIMATION, HERO_SELECTOR};
use crate::core::effects::{failed_resource_ref, is_slow_load, load_event_duration_ms};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the body transparent until the `load` fade-in runs.
pub fn hide_body_until_loaded(document: &web::Document) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "opacity", "0");
    }
}

fn fade_in_page(document: &web::Document) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "opacity", "1");
        dom::set_style(&body, "transition", BODY_FADE_TRANSITION);
    }
    if let Ok(Some(hero)) = document.query_selector(HERO_SELECTOR) {
        if let Ok(hero) = hero.dyn_into::<web::HtmlElement>() {
            dom::set_style(&hero, "animation", HERO_ANIMATION);
        }
    }
}

fn check_load_performance(window: &web::Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    let Some(timing) = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<web::PerformanceNavigationTiming>()
        .ok()
    else {
        log::debug!("[perf] no navigation timing entry");
        return;
    };
    let (start, end) = (timing.load_event_start(), timing.load_event_end());
    log::debug!("[perf] load event took {:.0} ms", load_event_duration_ms(start, end));
    if is_slow_load(start, end) {
        log::info!("Optimizing loading performance...");
    }
}

/// Page fade-in and the load-time performance check.
pub fn wire_load_handlers(window: &web::Window, document: &web::Document) {
    let has_performance = window.performance().is_some();
    let on_load = move |document: &web::Document| {
        fade_in_page(document);
        // loadEventEnd is only filled in once the load handlers have returned.
        if has_performance {
            dom::set_timeout(0, || {
                if let Some(window) = web::window() {
                    check_load_performance(&window);
                }
            });
        }
    };
    if dom::ready_state(document).as_deref() == Some("complete") {
        on_load(document);
        return;
    }
    let doc = document.clone();
    dom::add_listener(window, "load", move |_: web::Event| on_load(&doc));
}

/// Log failed image/script/stylesheet loads. Resource errors don't bubble,
/// so the listener runs in the capture phase.
pub fn wire_resource_error_logging(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
        let reference = failed_resource_ref(
            target.as_ref().and_then(|t| t.get_attribute("src")),
            target.as_ref().and_then(|t| t.get_attribute("href")),
        );
        log::warn!("Resource optimization in progress: {}", reference);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_bool(
        "error",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}
