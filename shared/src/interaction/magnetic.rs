use super::animate::Animate;
use super::pointer::{BoundingRect, PointerPosition, magnetic_target};
use super::spring::{SpringConfig, SpringVec2};
use super::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagneticInput {
    PointerMoved {
        rect: BoundingRect,
        pointer: PointerPosition,
    },
    PointerLeft,
}

/// Offset of one magnetic element: a raw target plus its spring-damped follower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticOffset {
    strength: f64,
    target: Vec2,
    damped: SpringVec2,
}

impl MagneticOffset {
    pub fn new(strength: f64, spring: SpringConfig) -> Self {
        Self {
            strength,
            target: Vec2::ZERO,
            damped: SpringVec2::new(spring, Vec2::ZERO),
        }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn damped(&self) -> Vec2 {
        self.damped.position()
    }
}

impl Animate for MagneticOffset {
    type Input = MagneticInput;
    type Output = Vec2;

    fn apply(&mut self, input: MagneticInput) {
        self.target = match input {
            MagneticInput::PointerMoved { rect, pointer } => magnetic_target(rect, pointer, self.strength),
            MagneticInput::PointerLeft => Vec2::ZERO,
        };
        self.damped.set_target(self.target);
    }

    fn tick(&mut self, elapsed_seconds: f64) {
        self.damped.step(elapsed_seconds);
    }

    fn is_settled(&self) -> bool {
        self.damped.is_at_rest()
    }

    fn output(&self) -> Vec2 {
        self.damped()
    }
}
