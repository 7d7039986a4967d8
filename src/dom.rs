use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `document.readyState`: "loading", "interactive" or "complete".
pub fn ready_state(document: &web::Document) -> Option<String> {
    js_sys::Reflect::get(document, &wasm_bindgen::JsValue::from_str("readyState"))
        .ok()
        .and_then(|s| s.as_string())
}

/// All elements matching `selector` that are `HtmlElement`s, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Text content of the first descendant of `el` matching `selector`.
pub fn child_text(el: &web::Element, selector: &str) -> Option<String> {
    el.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|child| child.text_content())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `delay_ms`. The timer is never cancelled.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let callback = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        );
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web::window() {
        _ = window.alert_with_message(message);
    }
}
