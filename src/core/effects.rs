// Small presentation decisions that don't warrant their own module.

use super::constants::{CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM, SLOW_LOAD_THRESHOLD_MS};

#[inline]
pub fn card_transform(hovered: bool) -> &'static str {
    if hovered {
        CARD_HOVER_TRANSFORM
    } else {
        CARD_REST_TRANSFORM
    }
}

/// Load-event duration from navigation timing, in milliseconds.
#[inline]
pub fn load_event_duration_ms(load_event_start: f64, load_event_end: f64) -> f64 {
    load_event_end - load_event_start
}

#[inline]
pub fn is_slow_load(load_event_start: f64, load_event_end: f64) -> bool {
    load_event_duration_ms(load_event_start, load_event_end) > SLOW_LOAD_THRESHOLD_MS
}

/// Reference to log for a failed resource: `src` first, then `href`.
pub fn failed_resource_ref(src: Option<String>, href: Option<String>) -> String {
    src.filter(|s| !s.is_empty())
        .or_else(|| href.filter(|h| !h.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn video_placeholder_message(title: &str) -> String {
    format!(
        "Video \"{}\" {}",
        title.trim(),
        super::constants::VIDEO_PLACEHOLDER_SUFFIX
    )
}
