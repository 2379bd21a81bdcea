//! Continuous rotation driver for the decorative orb.

use std::f64::consts::PI;

/// Radians per second around each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSpeeds {
    pub x: f64,
    pub y: f64,
}

impl RotationSpeeds {
    /// The orb's own spin.
    pub const ORB: RotationSpeeds = RotationSpeeds { x: 0.3, y: 0.75 };

    /// Camera orbit around the vertical axis: one revolution per 60 s at speed 1.
    pub fn auto_orbit(speed: f64) -> RotationSpeeds {
        RotationSpeeds {
            x: 0.0,
            y: 2.0 * PI / 60.0 * speed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub angle_x: f64,
    pub angle_y: f64,
}

/// Spins forever. Angles are never wrapped; trigonometry downstream handles that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationDriver {
    speeds: RotationSpeeds,
    state: RotationState,
}

impl RotationDriver {
    pub fn new(speeds: RotationSpeeds) -> Self {
        Self {
            speeds,
            state: RotationState::default(),
        }
    }

    pub fn tick(&mut self, elapsed_seconds: f64) {
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            return;
        }
        self.state.angle_x += elapsed_seconds * self.speeds.x;
        self.state.angle_y += elapsed_seconds * self.speeds.y;
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn speeds(&self) -> RotationSpeeds {
        self.speeds
    }
}

/// Turns absolute frame timestamps (seconds) into per-frame deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// The first call after construction or `reset` returns 0.
    pub fn delta(&mut self, now_seconds: f64) -> f64 {
        let elapsed = match self.last {
            Some(last) => (now_seconds - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now_seconds);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_depends_on_time_not_tick_count() {
        let mut coarse = RotationDriver::new(RotationSpeeds::ORB);
        coarse.tick(1.5);
        coarse.tick(1.5);

        let mut fine = RotationDriver::new(RotationSpeeds::ORB);
        for _ in 0..300 {
            fine.tick(0.01);
        }

        let expected_x = 3.0 * 0.3;
        let expected_y = 3.0 * 0.75;
        for driver in [coarse, fine] {
            assert!((driver.state().angle_x - expected_x).abs() < 1e-9);
            assert!((driver.state().angle_y - expected_y).abs() < 1e-9);
        }
    }

    #[test]
    fn angles_grow_without_wrapping() {
        let mut driver = RotationDriver::new(RotationSpeeds::ORB);
        driver.tick(100.0);
        assert!(driver.state().angle_y > 2.0 * PI);
        assert!((driver.state().angle_y - 75.0).abs() < 1e-9);
    }

    #[test]
    fn bad_elapsed_is_ignored() {
        let mut driver = RotationDriver::new(RotationSpeeds::ORB);
        driver.tick(-0.5);
        driver.tick(f64::NAN);
        assert_eq!(driver.state(), RotationState::default());
    }

    #[test]
    fn orbit_at_speed_two_takes_thirty_seconds() {
        let mut driver = RotationDriver::new(RotationSpeeds::auto_orbit(2.0));
        driver.tick(30.0);
        assert!((driver.state().angle_y - 2.0 * PI).abs() < 1e-9);
        assert_eq!(driver.state().angle_x, 0.0);
    }

    #[test]
    fn frame_clock_measures_deltas() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.delta(10.0), 0.0);
        assert!((clock.delta(10.016) - 0.016).abs() < 1e-12);
        assert_eq!(clock.delta(9.0), 0.0);
        clock.reset();
        assert_eq!(clock.delta(50.0), 0.0);
    }
}
