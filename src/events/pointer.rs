use crate::core::constants::{
    CONTACT_ITEM_SELECTOR, CONTACT_LABEL_SELECTOR, CONTACT_VALUE_SELECTOR, HOVER_SELECTOR,
    VIDEO_CARD_SELECTOR, VIDEO_TITLE_SELECTOR,
};
use crate::core::effects::{card_transform, video_placeholder_message};
use crate::core::ContactAction;
use crate::dom;
use web_sys as web;

pub fn wire_card_hover(document: &web::Document) {
    for card in dom::query_all(document, HOVER_SELECTOR) {
        let card_enter = card.clone();
        dom::add_listener(&card, "mouseenter", move |_: web::MouseEvent| {
            dom::set_style(&card_enter, "transform", card_transform(true));
        });
        let card_leave = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&card_leave, "transform", card_transform(false));
        });
    }
}

/// Phone and email entries open the dialer or mail client.
pub fn wire_contact_items(document: &web::Document) {
    for item in dom::query_all(document, CONTACT_ITEM_SELECTOR) {
        let item_click = item.clone();
        dom::add_listener(&item, "click", move |_: web::MouseEvent| {
            let label = dom::child_text(&item_click, CONTACT_LABEL_SELECTOR).unwrap_or_default();
            let value = dom::child_text(&item_click, CONTACT_VALUE_SELECTOR).unwrap_or_default();
            let Some(action) = ContactAction::from_entry(&label, &value) else {
                return;
            };
            let href = action.href();
            log::info!("[contact] opening {}", href);
            if let Some(window) = web::window() {
                if let Err(e) = window.location().set_href(&href) {
                    log::warn!("[contact] navigation to {} failed: {:?}", href, e);
                }
            }
        });
    }
}

// No player yet: tell the visitor which video they picked.
pub fn wire_video_cards(document: &web::Document) {
    for card in dom::query_all(document, VIDEO_CARD_SELECTOR) {
        let card_click = card.clone();
        dom::add_listener(&card, "click", move |_: web::MouseEvent| {
            let title = dom::child_text(&card_click, VIDEO_TITLE_SELECTOR).unwrap_or_default();
            dom::alert(&video_placeholder_message(&title));
        });
    }
}
