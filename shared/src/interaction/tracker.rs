use super::animate::Animate;
use super::lifecycle::ViewportEvent;
use super::pointer::{CURSOR_GLOW_RADIUS, PointerPosition, cursor_glow_target};
use super::scroll::{ScrollState, map_range_clamped};
use super::spring::{SpringConfig, SpringVec2};
use super::vec2::Vec2;

/// Glow scale at the top and at the bottom of the page.
const GLOW_SCALE_RANGE: (f64, f64) = (1.0, 1.1);

/// Page-wide state fed by the global scroll and pointer listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTracker {
    scroll: ScrollState,
    pointer: Option<PointerPosition>,
    glow: SpringVec2,
    glow_radius: f64,
    glow_scale_max: f64,
}

/// What the views render from the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSnapshot {
    pub progress_percent: f64,
    pub scrolled: bool,
    /// Top-left corner of the glow element.
    pub glow: Vec2,
    pub glow_scale: f64,
}

impl ViewportTracker {
    pub fn new(glow_spring: SpringConfig, glow_scale_max: f64) -> Self {
        Self {
            scroll: ScrollState::default(),
            pointer: None,
            glow: SpringVec2::new(glow_spring, Vec2::ZERO),
            glow_radius: CURSOR_GLOW_RADIUS,
            glow_scale_max,
        }
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    pub fn glow_target(&self) -> Vec2 {
        self.glow.target()
    }
}

impl Animate for ViewportTracker {
    type Input = ViewportEvent;
    type Output = ViewportSnapshot;

    fn apply(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Scrolled(metrics) => self.scroll.update(metrics),
            ViewportEvent::PointerMoved(pointer) => {
                let target = cursor_glow_target(pointer, self.glow_radius);
                // The glow appears under the first pointer position instead of flying in from the corner.
                if self.pointer.is_none() {
                    self.glow.jump_to(target);
                } else {
                    self.glow.set_target(target);
                }
                self.pointer = Some(pointer);
            }
        }
    }

    fn tick(&mut self, elapsed_seconds: f64) {
        self.glow.step(elapsed_seconds);
    }

    fn is_settled(&self) -> bool {
        self.glow.is_at_rest()
    }

    fn output(&self) -> ViewportSnapshot {
        let progress_percent = self.scroll.progress_percent();
        ViewportSnapshot {
            progress_percent,
            scrolled: self.scroll.is_scrolled(),
            glow: self.glow.position(),
            glow_scale: map_range_clamped(
                progress_percent,
                (0.0, 100.0),
                (GLOW_SCALE_RANGE.0, self.glow_scale_max),
            ),
        }
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(SpringConfig::new(120.0, 15.0), GLOW_SCALE_RANGE.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::scroll::ScrollMetrics;

    #[test]
    fn scroll_events_drive_progress_and_header() {
        let mut tracker = ViewportTracker::default();
        tracker.apply(ViewportEvent::Scrolled(ScrollMetrics::new(250.0, 2000.0, 1000.0)));
        let snapshot = tracker.output();
        assert_eq!(snapshot.progress_percent, 25.0);
        assert!(snapshot.scrolled);
        assert!((snapshot.glow_scale - 1.025).abs() < 1e-12);

        tracker.apply(ViewportEvent::Scrolled(ScrollMetrics::new(0.0, 2000.0, 1000.0)));
        let snapshot = tracker.output();
        assert_eq!(snapshot.progress_percent, 0.0);
        assert!(!snapshot.scrolled);
        assert_eq!(snapshot.glow_scale, 1.0);
    }

    #[test]
    fn short_page_stays_at_zero() {
        let mut tracker = ViewportTracker::default();
        tracker.apply(ViewportEvent::Scrolled(ScrollMetrics::new(0.0, 700.0, 900.0)));
        assert_eq!(tracker.output().progress_percent, 0.0);
        assert_eq!(tracker.output().glow_scale, 1.0);
    }

    #[test]
    fn glow_follows_pointer_with_lag() {
        let mut tracker = ViewportTracker::default();
        tracker.apply(ViewportEvent::PointerMoved(PointerPosition::new(300.0, 300.0)));
        assert_eq!(tracker.output().glow, Vec2::new(100.0, 100.0));
        assert!(tracker.is_settled());

        tracker.apply(ViewportEvent::PointerMoved(PointerPosition::new(700.0, 300.0)));
        assert_eq!(tracker.glow_target(), Vec2::new(500.0, 100.0));
        tracker.tick(1.0 / 60.0);
        let glow = tracker.output().glow;
        assert!(glow.x > 100.0 && glow.x < 500.0);
        assert_eq!(glow.y, 100.0);

        for _ in 0..300 {
            tracker.tick(1.0 / 60.0);
        }
        assert_eq!(tracker.output().glow, Vec2::new(500.0, 100.0));
    }
}
