use crate::core::constants::{
    ACTIVE_CLASS, MOBILE_TOGGLE_ID, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TARGET_ATTR,
    SECTION_SELECTOR,
};
use crate::core::{activation_mask, MenuState, PageState};
use crate::dom;
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static PAGE: RefCell<PageState> = RefCell::new(PageState::default());
}

pub fn current_section() -> String {
    PAGE.with(|p| p.borrow().current().to_string())
}

/// Show the section `section_id`, highlight its link, close the mobile menu
/// and scroll back to the top.
pub fn show_section(section_id: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };

    let sections = dom::query_all(&document, SECTION_SELECTOR);
    let section_ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
    let mask = activation_mask(
        section_ids
            .iter()
            .map(|id| (!id.is_empty()).then_some(id.as_str())),
        section_id,
    );
    for (section, active) in sections.iter().zip(&mask) {
        dom::set_class(section, ACTIVE_CLASS, *active);
    }
    if !mask.contains(&true) {
        log::debug!("[nav] no section with id {:?}", section_id);
    }

    let links = dom::query_all(&document, NAV_LINK_SELECTOR);
    let targets: Vec<Option<String>> = links
        .iter()
        .map(|l| l.get_attribute(NAV_TARGET_ATTR))
        .collect();
    let mask = activation_mask(targets.iter().map(|t| t.as_deref()), section_id);
    for (link, active) in links.iter().zip(&mask) {
        dom::set_class(link, ACTIVE_CLASS, *active);
    }

    close_menu(&document);

    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }

    let previous = PAGE.with(|p| p.borrow_mut().navigate(section_id));
    log::info!("[nav] {} -> {}", previous, section_id);
}

fn close_menu(document: &web::Document) {
    let icon = MenuState::default().close();
    if let Some(menu) = document.get_element_by_id(NAV_MENU_ID) {
        dom::set_class(&menu, ACTIVE_CLASS, false);
    }
    if let Some(toggle) = document.get_element_by_id(MOBILE_TOGGLE_ID) {
        toggle.set_inner_html(icon.markup());
    }
}

/// Every element carrying a target section id navigates on click.
pub fn wire_nav_links(document: &web::Document) {
    let selector = format!("[{}]", NAV_TARGET_ATTR);
    let links = dom::query_all(document, &selector);
    for link in &links {
        let Some(target) = link.get_attribute(NAV_TARGET_ATTR) else {
            continue;
        };
        dom::add_listener(link, "click", move |ev: web::Event| {
            ev.prevent_default();
            show_section(&target);
        });
    }
    log::info!("[nav] wired {} links", links.len());
}

pub fn wire_mobile_toggle(document: &web::Document) {
    let Some(toggle) = document.get_element_by_id(MOBILE_TOGGLE_ID) else {
        log::debug!("[nav] no #{} on this page", MOBILE_TOGGLE_ID);
        return;
    };
    let doc = document.clone();
    let toggle_el = toggle.clone();
    dom::add_listener(&toggle, "click", move |_: web::Event| {
        let Some(menu) = doc.get_element_by_id(NAV_MENU_ID) else {
            return;
        };
        let mut state = MenuState::from_open(menu.class_list().contains(ACTIVE_CLASS));
        let icon = state.toggle();
        dom::set_class(&menu, ACTIVE_CLASS, state.open);
        toggle_el.set_inner_html(icon.markup());
    });
}
