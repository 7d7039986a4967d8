// Host-side tests for staggered entrance reveals.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod page {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use page::reveal::*;

#[test]
fn three_element_batch_is_staggered_in_detection_order() {
    let mut tracker = RevealTracker::with_len(5);
    let planned = tracker.plan_batch([(3, true), (0, true), (4, true)]);
    assert_eq!(
        planned,
        vec![
            ScheduledReveal { index: 3, delay_ms: 0 },
            ScheduledReveal { index: 0, delay_ms: 100 },
            ScheduledReveal { index: 4, delay_ms: 200 },
        ]
    );
}

#[test]
fn non_intersecting_entries_do_not_take_a_slot() {
    let mut tracker = RevealTracker::with_len(4);
    let planned = tracker.plan_batch([(0, false), (1, true), (2, false), (3, true)]);
    let delays: Vec<(usize, u32)> = planned.iter().map(|s| (s.index, s.delay_ms)).collect();
    assert_eq!(delays, vec![(1, 0), (3, 100)]);
    assert!(!tracker.is_revealed(0));
    assert!(!tracker.is_revealed(2));
}

#[test]
fn reveal_is_one_way() {
    let mut tracker = RevealTracker::with_len(2);
    assert_eq!(tracker.plan_batch([(1, true)]).len(), 1);
    // Leaves the viewport and comes back.
    assert!(tracker.plan_batch([(1, false)]).is_empty());
    assert!(tracker.plan_batch([(1, true)]).is_empty());
    assert!(tracker.is_revealed(1));
    assert_eq!(tracker.revealed_count(), 1);
}

#[test]
fn new_batch_restarts_stagger_at_zero() {
    let mut tracker = RevealTracker::with_len(3);
    tracker.plan_batch([(0, true), (1, true)]);
    let planned = tracker.plan_batch([(2, true)]);
    assert_eq!(planned, vec![ScheduledReveal { index: 2, delay_ms: 0 }]);
}

#[test]
fn unknown_indices_are_ignored() {
    let mut tracker = RevealTracker::with_len(1);
    assert!(tracker.plan_batch([(7, true)]).is_empty());
    assert!(!tracker.is_revealed(7));
}

#[test]
fn duplicate_entries_in_one_batch_schedule_once() {
    let mut tracker = RevealTracker::with_len(2);
    let planned = tracker.plan_batch([(0, true), (0, true), (1, true)]);
    assert_eq!(planned.len(), 2);
    assert_eq!(planned[1], ScheduledReveal { index: 1, delay_ms: 100 });
}

#[test]
fn stagger_delay_is_linear() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(1), 100);
    assert_eq!(stagger_delay_ms(12), 1200);
}

#[test]
fn empty_tracker() {
    let tracker = RevealTracker::default();
    assert!(tracker.is_empty());
    assert_eq!(tracker.len(), 0);
}
