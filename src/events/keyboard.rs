use crate::core::constants::KEYBOARD_NAV_CLASS;
use crate::core::KeyboardNavigation;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply_marker(document: &web::Document, state: &KeyboardNavigation) {
    if let Some(body) = document.body() {
        dom::set_class(&body, KEYBOARD_NAV_CLASS, state.is_active());
    }
}

// Tab turns the focus-ring marker on; any mouse press turns it off.
pub fn wire_keyboard_navigation(document: &web::Document) {
    let state = Rc::new(RefCell::new(KeyboardNavigation::default()));

    let state_key = state.clone();
    let doc_key = document.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        let mut s = state_key.borrow_mut();
        if s.on_key(&ev.key()) {
            apply_marker(&doc_key, &s);
        }
    });

    let doc_down = document.clone();
    dom::add_listener(document, "mousedown", move |_: web::MouseEvent| {
        let mut s = state.borrow_mut();
        if s.on_pointer_down() {
            apply_marker(&doc_down, &s);
        }
    });
}
