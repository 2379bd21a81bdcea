//! Damped spring used to smooth every pointer-driven target.
//!
//! Second-order dynamics `a = (-k (x - target) - c v) / m`, integrated with
//! semi-implicit Euler. Frames are split into fixed-size substeps so the
//! result barely depends on the frame rate, and a long stall (background tab)
//! is clamped instead of launching the value across the screen.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Largest integration step.
const MAX_SUBSTEP_SECONDS: f64 = 1.0 / 120.0;
/// Longest frame integrated in one call.
const MAX_FRAME_SECONDS: f64 = 0.1;
/// Distance to the target below which the spring may snap.
const REST_DELTA: f64 = 0.01;
/// Speed below which the spring may snap.
const REST_SPEED: f64 = 0.05;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// `< 1` oscillates around the target, `>= 1` settles without overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(200.0, 20.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Retarget. Position and velocity are kept so the motion stays continuous.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Teleport to `value` and stop.
    pub fn jump_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn step(&mut self, elapsed_seconds: f64) {
        if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 || self.is_at_rest() {
            return;
        }

        let mut remaining = elapsed_seconds.min(MAX_FRAME_SECONDS);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_SUBSTEP_SECONDS);
            let spring_force = -self.config.stiffness * (self.position - self.target);
            let damping_force = -self.config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / self.config.mass;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }

        if (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }
}

/// Two independent springs sharing one config, one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringVec2 {
    x: Spring,
    y: Spring,
}

impl SpringVec2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump_to(&mut self, value: Vec2) {
        self.x.jump_to(value.x);
        self.y.jump_to(value.y);
    }

    pub fn step(&mut self, elapsed_seconds: f64) {
        self.x.step(elapsed_seconds);
        self.y.step(elapsed_seconds);
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &mut Spring, seconds: f64) {
        let frames = (seconds / FRAME).round() as usize;
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SpringConfig::new(200.0, 20.0), 0.0);
        spring.set_target(40.0);
        run(&mut spring, 3.0);
        assert_eq!(spring.position(), 40.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn moves_toward_target_without_jumping() {
        let mut spring = Spring::new(SpringConfig::new(120.0, 15.0), 0.0);
        spring.set_target(100.0);
        spring.step(FRAME);
        let first = spring.position();
        assert!(first > 0.0 && first < 10.0, "first frame moved to {first}");
    }

    #[test]
    fn retarget_keeps_position_and_velocity() {
        let mut spring = Spring::new(SpringConfig::new(200.0, 20.0), 0.0);
        spring.set_target(50.0);
        run(&mut spring, 0.1);
        let (position, velocity) = (spring.position(), spring.velocity());
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.position(), position);
        assert_eq!(spring.velocity(), velocity);

        // Momentum carries it further before it turns around.
        spring.step(FRAME);
        assert!(spring.position() > position);
    }

    #[test]
    fn invalid_elapsed_is_ignored() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(10.0);
        let before = spring;
        spring.step(0.0);
        spring.step(-1.0);
        spring.step(f64::NAN);
        spring.step(f64::INFINITY);
        assert_eq!(spring, before);
    }

    #[test]
    fn long_stall_stays_bounded() {
        let mut spring = Spring::new(SpringConfig::new(200.0, 20.0), 0.0);
        spring.set_target(10.0);
        spring.step(30.0);
        assert!(spring.position().is_finite());
        assert!(spring.position().abs() < 20.0);
    }

    #[test]
    fn underdamped_presets_overshoot() {
        let config = SpringConfig::new(200.0, 20.0);
        assert!(config.damping_ratio() < 1.0);

        let mut spring = Spring::new(config, 0.0);
        spring.set_target(10.0);
        let mut peak: f64 = 0.0;
        for _ in 0..120 {
            spring.step(FRAME);
            peak = peak.max(spring.position());
        }
        assert!(peak > 10.0);
    }

    #[test]
    fn axes_are_independent() {
        let mut spring = SpringVec2::new(SpringConfig::new(120.0, 15.0), Vec2::ZERO);
        spring.set_target(Vec2::new(30.0, 0.0));
        for _ in 0..10 {
            spring.step(FRAME);
        }
        assert!(spring.position().x > 0.0);
        assert_eq!(spring.position().y, 0.0);
    }

    #[test]
    fn config_mass_defaults_when_missing() {
        let config: SpringConfig = serde_json::from_str(r#"{"stiffness":160.0,"damping":20.0}"#).unwrap();
        assert_eq!(config, SpringConfig::new(160.0, 20.0));
    }
}
