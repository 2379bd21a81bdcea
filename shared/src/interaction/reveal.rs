/// Fraction of an element that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.25;

/// One-shot fade-up: once shown, an element stays shown even when scrolled away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    /// Feed an intersection ratio. Returns `true` on the transition to `Shown`.
    pub fn observe(&mut self, intersection_ratio: f64, threshold: f64) -> bool {
        if *self == Reveal::Hidden && intersection_ratio >= threshold && intersection_ratio > 0.0 {
            *self = Reveal::Shown;
            return true;
        }
        false
    }

    pub fn is_shown(self) -> bool {
        self == Reveal::Shown
    }

    pub fn opacity(self) -> f64 {
        match self {
            Reveal::Hidden => 0.0,
            Reveal::Shown => 1.0,
        }
    }

    /// `translateY` in px for a fade-up that starts `offset_px` below its rest position.
    pub fn translate_y(self, offset_px: f64) -> f64 {
        match self {
            Reveal::Hidden => offset_px,
            Reveal::Shown => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_once_threshold_is_met() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(0.1, REVEAL_THRESHOLD));
        assert_eq!(reveal.opacity(), 0.0);
        assert_eq!(reveal.translate_y(28.0), 28.0);

        assert!(reveal.observe(0.3, REVEAL_THRESHOLD));
        assert!(reveal.is_shown());
        assert_eq!(reveal.translate_y(28.0), 0.0);
    }

    #[test]
    fn never_hides_again() {
        let mut reveal = Reveal::default();
        reveal.observe(1.0, REVEAL_THRESHOLD);
        assert!(!reveal.observe(0.0, REVEAL_THRESHOLD));
        assert!(!reveal.observe(0.8, REVEAL_THRESHOLD));
        assert_eq!(reveal, Reveal::Shown);
    }
}
