//! Scroll progress derivation.

use serde::{Deserialize, Serialize};

/// Offset past which the header switches to its condensed look.
pub const SCROLLED_THRESHOLD_PX: f64 = 24.0;

/// Raw document scroll metrics, as read on every scroll event.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// `window.scrollY`
    pub scroll_y: f64,
    /// `document.documentElement.scrollHeight`
    pub scroll_height: f64,
    /// `document.documentElement.clientHeight`
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_y,
            scroll_height,
            client_height,
        }
    }

    /// Distance the viewport can travel. Zero or negative when nothing overflows.
    pub fn total_scrollable(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Percentage of the scrollable distance covered by `offset`.
///
/// A document without overflow (`total <= 0`) reports 0 instead of dividing
/// by zero. Overscroll (rubber-banding) is clamped into `[0, 100]`.
pub fn scroll_progress(offset: f64, total: f64) -> f64 {
    if total > 0.0 {
        (offset / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Linear map of `value` from `from` onto `to`, clamped to the output range.
pub fn map_range_clamped(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset_pixels: f64,
    pub total_scrollable_pixels: f64,
}

impl ScrollState {
    pub fn update(&mut self, metrics: ScrollMetrics) {
        self.offset_pixels = metrics.scroll_y.max(0.0);
        self.total_scrollable_pixels = metrics.total_scrollable();
    }

    pub fn progress_percent(&self) -> f64 {
        scroll_progress(self.offset_pixels, self.total_scrollable_pixels)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset_pixels > SCROLLED_THRESHOLD_PX
    }
}
