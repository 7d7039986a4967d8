// Host-side tests for scroll-driven header and progress state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod page {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use page::constants::{HEADER_HIDDEN_TRANSFORM, HEADER_SHOWN_TRANSFORM};
use page::scroll::*;

fn metrics(offset: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        document_height: 3000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn progress_is_offset_over_scrollable_range() {
    assert_eq!(progress_fraction(&metrics(0.0)), 0.0);
    assert!((progress_fraction(&metrics(500.0)) - 0.25).abs() < 1e-9);
    assert!((progress_fraction(&metrics(1000.0)) - 0.5).abs() < 1e-9);
    assert_eq!(progress_fraction(&metrics(2000.0)), 1.0);
}

#[test]
fn progress_is_clamped() {
    // Overscroll (e.g. elastic scrolling) stays in range.
    assert_eq!(progress_fraction(&metrics(2500.0)), 1.0);
    assert_eq!(progress_fraction(&metrics(-40.0)), 0.0);
}

#[test]
fn document_that_fits_reports_zero_progress() {
    let m = ScrollMetrics {
        offset: 0.0,
        document_height: 800.0,
        viewport_height: 800.0,
    };
    assert_eq!(progress_fraction(&m), 0.0);
    let shorter = ScrollMetrics {
        offset: 10.0,
        document_height: 600.0,
        viewport_height: 800.0,
    };
    assert_eq!(progress_fraction(&shorter), 0.0);
}

#[test]
fn header_scrolled_past_fifty_pixels() {
    let mut t = ScrollTracker::default();
    assert!(!t.update(metrics(50.0)).scrolled);
    assert!(t.update(metrics(51.0)).scrolled);
    assert!(!t.update(metrics(10.0)).scrolled);
}

#[test]
fn header_hides_only_when_scrolling_down_past_hundred() {
    let mut t = ScrollTracker::default();
    // Downward but not yet past the threshold.
    assert!(!t.update(metrics(90.0)).header_hidden);
    assert!(t.update(metrics(150.0)).header_hidden);
    assert!(t.update(metrics(400.0)).header_hidden);
}

#[test]
fn any_upward_movement_shows_header() {
    let mut t = ScrollTracker::new(1500.0);
    let frame = t.update(metrics(1499.0));
    assert!(!frame.header_hidden);
    assert_eq!(frame.header_transform(), HEADER_SHOWN_TRANSFORM);
}

#[test]
fn unchanged_offset_shows_header() {
    let mut t = ScrollTracker::new(600.0);
    assert!(!t.update(metrics(600.0)).header_hidden);
}

#[test]
fn tracker_remembers_last_offset() {
    let mut t = ScrollTracker::default();
    t.update(metrics(321.0));
    assert_eq!(t.last_offset(), 321.0);
}

#[test]
fn frame_transforms() {
    let mut t = ScrollTracker::default();
    let frame = t.update(metrics(1000.0));
    assert_eq!(frame.progress_transform(), "scaleX(0.5)");
    assert_eq!(frame.header_transform(), HEADER_HIDDEN_TRANSFORM);
}

#[test]
fn throttle_allows_one_schedule_per_frame() {
    let mut throttle = FrameThrottle::default();
    assert!(throttle.try_schedule());
    assert!(!throttle.try_schedule());
    assert!(!throttle.try_schedule());
    assert!(throttle.is_scheduled());
    throttle.complete();
    assert!(!throttle.is_scheduled());
    assert!(throttle.try_schedule());
}
