use crate::core::constants::{
    FADE_IN_CLASS, REVEAL_HIDDEN_OPACITY, REVEAL_HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN,
    REVEAL_SELECTOR, REVEAL_SHOWN_OPACITY, REVEAL_SHOWN_TRANSFORM, REVEAL_THRESHOLD,
    REVEAL_TRANSITION,
};
use crate::core::RevealTracker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const INDEX_ATTR: &str = "data-reveal-index";

fn registered_index(el: &web::Element) -> Option<usize> {
    el.get_attribute(INDEX_ATTR)?.parse().ok()
}

fn reveal(el: &web::HtmlElement) {
    dom::set_class(el, FADE_IN_CLASS, true);
    dom::set_style(el, "opacity", REVEAL_SHOWN_OPACITY);
    dom::set_style(el, "transform", REVEAL_SHOWN_TRANSFORM);
}

/// Hide the animated elements and reveal them, staggered, as they scroll
/// into view.
pub fn wire_entrance_animation(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        log::debug!("[reveal] nothing to animate");
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::with_len(elements.len())));

    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let entries: Vec<web::IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .collect();
            let batch = entries.iter().filter_map(|entry| {
                registered_index(&entry.target()).map(|i| (i, entry.is_intersecting()))
            });
            let planned = tracker_cb.borrow_mut().plan_batch(batch);
            for scheduled in planned {
                let target = entries
                    .iter()
                    .map(|e| e.target())
                    .find(|t| registered_index(t) == Some(scheduled.index))
                    .and_then(|t| t.dyn_into::<web::HtmlElement>().ok());
                if let Some(el) = target {
                    dom::set_timeout(scheduled.delay_ms, move || reveal(&el));
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for (i, el) in elements.iter().enumerate() {
        _ = el.set_attribute(INDEX_ATTR, &i.to_string());
        dom::set_style(el, "opacity", REVEAL_HIDDEN_OPACITY);
        dom::set_style(el, "transform", REVEAL_HIDDEN_TRANSFORM);
        dom::set_style(el, "transition", REVEAL_TRANSITION);
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", tracker.borrow().len());
    Ok(())
}
