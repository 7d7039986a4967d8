use crate::core::constants::FORM_SELECTOR;
use crate::core::{process_submission, ContactSubmission, LocalSubmitter};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn read_submission(form: &web::HtmlFormElement) -> ContactSubmission {
    match web::FormData::new_with_form(form) {
        Ok(data) => ContactSubmission::from_lookup(|name| data.get(name).as_string()),
        Err(e) => {
            log::warn!("[form] FormData unavailable: {:?}", e);
            ContactSubmission::default()
        }
    }
}

/// Intercept the contact form: validate locally, notify, clear on success.
pub fn wire_contact_form(document: &web::Document) {
    let form = document
        .query_selector(FORM_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::debug!("[form] no form on this page");
        return;
    };

    let form_submit = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let submission = read_submission(&form_submit);
        let outcome = process_submission(&submission, &LocalSubmitter);
        dom::alert(outcome.notification());
        if outcome.clears_form() {
            form_submit.reset();
        }
    });
}
