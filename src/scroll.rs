use crate::core::constants::{HEADER_ID, SCROLLED_CLASS, SCROLL_PROGRESS_ID};
use crate::core::{FrameThrottle, ScrollMetrics, ScrollTracker};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ScrollContext {
    window: web::Window,
    document: web::Document,
    header: Option<web::HtmlElement>,
    progress: Option<web::HtmlElement>,
    tracker: ScrollTracker,
    throttle: FrameThrottle,
}

impl ScrollContext {
    fn sample(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.window.scroll_y().unwrap_or(0.0),
            document_height: self
                .document
                .body()
                .map(|b| b.scroll_height() as f64)
                .unwrap_or(0.0),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
        }
    }

    fn frame(&mut self) {
        let frame = self.tracker.update(self.sample());
        if let Some(header) = &self.header {
            dom::set_class(header, SCROLLED_CLASS, frame.scrolled);
            dom::set_style(header, "transform", frame.header_transform());
        }
        if let Some(progress) = &self.progress {
            dom::set_style(progress, "transform", &frame.progress_transform());
        }
        self.throttle.complete();
    }
}

/// Recompute header and progress-bar state at most once per animation frame.
pub fn wire_scroll_effects(window: &web::Window, document: &web::Document) {
    let header = dom::html_element_by_id(document, HEADER_ID);
    let progress = dom::html_element_by_id(document, SCROLL_PROGRESS_ID);
    if header.is_none() && progress.is_none() {
        log::warn!("[scroll] neither #{} nor #{} found", HEADER_ID, SCROLL_PROGRESS_ID);
        return;
    }

    let ctx = Rc::new(RefCell::new(ScrollContext {
        window: window.clone(),
        document: document.clone(),
        header,
        progress,
        tracker: ScrollTracker::new(window.scroll_y().unwrap_or(0.0)),
        throttle: FrameThrottle::default(),
    }));

    let ctx_frame = ctx.clone();
    let on_frame = Closure::wrap(Box::new(move || {
        ctx_frame.borrow_mut().frame();
    }) as Box<dyn FnMut()>);

    let window_raf = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        if !ctx.borrow_mut().throttle.try_schedule() {
            return;
        }
        if let Err(e) = window_raf.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
            log::warn!("[scroll] requestAnimationFrame failed: {:?}", e);
            ctx.borrow_mut().throttle.complete();
        }
    });
}
