use super::animate::Animate;
use super::spring::{Spring, SpringConfig};

/// Vertical lift of a card while hovered. Output is the CSS `translateY` in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverLift {
    lift_px: f64,
    offset: Spring,
}

impl HoverLift {
    pub fn new(lift_px: f64, spring: SpringConfig) -> Self {
        Self {
            lift_px,
            offset: Spring::new(spring, 0.0),
        }
    }
}

impl Animate for HoverLift {
    type Input = bool;
    type Output = f64;

    fn apply(&mut self, hovered: bool) {
        self.offset.set_target(if hovered { -self.lift_px } else { 0.0 });
    }

    fn tick(&mut self, elapsed_seconds: f64) {
        self.offset.step(elapsed_seconds);
    }

    fn is_settled(&self) -> bool {
        self.offset.is_at_rest()
    }

    fn output(&self) -> f64 {
        self.offset.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifts_while_hovered_and_returns() {
        let mut lift = HoverLift::new(4.0, SpringConfig::new(160.0, 20.0));
        lift.apply(true);
        for _ in 0..180 {
            lift.tick(1.0 / 60.0);
        }
        assert_eq!(lift.output(), -4.0);

        lift.apply(false);
        for _ in 0..180 {
            lift.tick(1.0 / 60.0);
        }
        assert_eq!(lift.output(), 0.0);
        assert!(lift.is_settled());
    }
}
