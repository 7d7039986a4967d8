// Host-side tests for section switching and the mobile menu.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod page {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
}

use page::constants::{DEFAULT_SECTION_ID, ICON_BARS_HTML, ICON_CLOSE_HTML};
use page::nav::*;

const SECTIONS: [&str; 4] = ["home", "services", "videos", "contact"];

#[test]
fn every_known_section_activates_exactly_one() {
    for target in SECTIONS {
        let mask = activation_mask(SECTIONS.iter().map(|s| Some(*s)), target);
        assert_eq!(mask.iter().filter(|a| **a).count(), 1, "target {}", target);
        let pos = SECTIONS.iter().position(|s| *s == target).unwrap();
        assert!(mask[pos]);
    }
}

#[test]
fn unknown_section_deactivates_everything() {
    let mask = activation_mask(SECTIONS.iter().map(|s| Some(*s)), "pricing");
    assert_eq!(mask, vec![false; SECTIONS.len()]);
}

#[test]
fn links_without_target_never_match() {
    let links = [Some("home"), None, Some("contact")];
    let mask = activation_mask(links, "contact");
    assert_eq!(mask, vec![false, false, true]);
}

#[test]
fn duplicate_targets_only_first_is_active() {
    let links = [Some("home"), Some("contact"), Some("contact")];
    assert_eq!(activation_mask(links, "contact"), vec![false, true, false]);
    assert_eq!(first_match(links, "contact"), Some(1));
}

#[test]
fn page_state_starts_at_home_and_records_navigation() {
    let mut state = PageState::default();
    assert_eq!(state.current(), DEFAULT_SECTION_ID);
    let prev = state.navigate("services");
    assert_eq!(prev, "home");
    assert_eq!(state.current(), "services");
    // Unmatched ids are still recorded as current.
    state.navigate("nowhere");
    assert_eq!(state.current(), "nowhere");
}

#[test]
fn menu_toggle_keeps_icon_in_sync() {
    let mut menu = MenuState::default();
    assert_eq!(menu.toggle(), MenuIcon::Close);
    assert!(menu.open);
    assert_eq!(menu.toggle(), MenuIcon::Bars);
    assert!(!menu.open);
}

#[test]
fn menu_toggle_reads_existing_state() {
    let mut menu = MenuState::from_open(true);
    assert_eq!(menu.toggle(), MenuIcon::Bars);
    assert!(!menu.open);
}

#[test]
fn close_always_resets_to_bars() {
    let mut open = MenuState::from_open(true);
    assert_eq!(open.close(), MenuIcon::Bars);
    assert!(!open.open);
    let mut closed = MenuState::default();
    assert_eq!(closed.close(), MenuIcon::Bars);
}

#[test]
fn icon_markup_matches_font_awesome_glyphs() {
    assert_eq!(MenuIcon::Bars.markup(), ICON_BARS_HTML);
    assert_eq!(MenuIcon::Close.markup(), ICON_CLOSE_HTML);
    assert!(MenuIcon::Close.markup().contains("fa-times"));
}
