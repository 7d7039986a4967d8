// Scroll-driven header and progress-bar state.
//
// Everything here is platform free: the web layer samples the window
// geometry into [`ScrollMetrics`], asks a [`ScrollTracker`] for the next
// [`ScrollFrame`] and applies it to the DOM.

use super::constants::{
    HEADER_HIDDEN_TRANSFORM, HEADER_HIDE_THRESHOLD_PX, HEADER_SCROLLED_THRESHOLD_PX,
    HEADER_SHOWN_TRANSFORM,
};

/// One sample of the scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Distance the document can actually scroll.
    #[inline]
    pub fn scrollable_range(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Fraction of the document scrolled, clamped to [0, 1].
///
/// A document that fits in the viewport has no scrollable range and reports 0.
#[inline]
pub fn progress_fraction(metrics: &ScrollMetrics) -> f64 {
    let range = metrics.scrollable_range();
    if range.is_nan() || range <= 0.0 || !metrics.offset.is_finite() {
        return 0.0;
    }
    (metrics.offset / range).clamp(0.0, 1.0)
}

/// Visual state to apply after one recomputation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub scrolled: bool,
    pub progress: f64,
    pub header_hidden: bool,
}

impl ScrollFrame {
    pub fn progress_transform(&self) -> String {
        format!("scaleX({})", self.progress)
    }

    #[inline]
    pub fn header_transform(&self) -> &'static str {
        if self.header_hidden {
            HEADER_HIDDEN_TRANSFORM
        } else {
            HEADER_SHOWN_TRANSFORM
        }
    }
}

/// Remembers the previous offset so scroll direction can be derived.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            last_offset: initial_offset,
        }
    }

    #[inline]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn update(&mut self, metrics: ScrollMetrics) -> ScrollFrame {
        let offset = metrics.offset;
        let moving_down = offset > self.last_offset;
        let frame = ScrollFrame {
            scrolled: offset > HEADER_SCROLLED_THRESHOLD_PX,
            progress: progress_fraction(&metrics),
            header_hidden: moving_down && offset > HEADER_HIDE_THRESHOLD_PX,
        };
        self.last_offset = offset;
        frame
    }
}

/// Collapses bursts of scroll events into one recomputation per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    scheduled: bool,
}

impl FrameThrottle {
    /// Returns true when the caller should request a new animation frame.
    pub fn try_schedule(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback once the recomputation has run.
    pub fn complete(&mut self) {
        self.scheduled = false;
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}
