//! Pointer-relative derivations: magnetic targets and the cursor glow.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Strength used by magnetic elements that do not pick their own.
pub const DEFAULT_MAGNETIC_STRENGTH: f64 = 0.28;

/// Half the size of the 400px cursor glow; the glow is centered on the pointer.
pub const CURSOR_GLOW_RADIUS: f64 = 200.0;

/// Latest pointer client coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerPosition {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.client_x, self.client_y)
    }
}

/// Element bounds in client coordinates (`getBoundingClientRect`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pointer displacement from the center of `rect`.
pub fn offset_from_center(rect: BoundingRect, pointer: PointerPosition) -> Vec2 {
    pointer.as_vec2() - rect.center()
}

/// Where a magnetic element wants to drift: the center offset scaled by `strength`.
pub fn magnetic_target(rect: BoundingRect, pointer: PointerPosition, strength: f64) -> Vec2 {
    offset_from_center(rect, pointer) * strength
}

/// Top-left corner of a glow of `radius` centered on the pointer.
pub fn cursor_glow_target(pointer: PointerPosition, radius: f64) -> Vec2 {
    Vec2::new(pointer.client_x - radius, pointer.client_y - radius)
}
