use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interaction::SpringConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(value.to_owned())),
        }
    }
}

/// CSS colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub surface: &'static str,
    pub surface_border: &'static str,
    pub header_scrolled: &'static str,
    pub text: &'static str,
    pub text_strong: &'static str,
    pub text_muted: &'static str,
    pub chip_background: &'static str,
    pub progress_track: &'static str,
    pub accent: &'static str,
    pub accent_secondary: &'static str,
    pub accent_tertiary: &'static str,
    pub live_dot: &'static str,
    pub cursor_glow: &'static str,
    /// Hex so the orb canvas can parse it into RGB.
    pub orb_wire: &'static str,
}

impl Palette {
    pub fn accent_gradient(&self) -> String {
        format!(
            "linear-gradient(to right, {}, {}, {})",
            self.accent, self.accent_secondary, self.accent_tertiary
        )
    }
}

const DARK_PALETTE: Palette = Palette {
    page_background: "#020617",
    surface: "rgba(15, 23, 42, 0.6)",
    surface_border: "rgba(51, 65, 85, 0.4)",
    header_scrolled: "rgba(2, 6, 23, 0.7)",
    text: "#cbd5e1",
    text_strong: "#ffffff",
    text_muted: "#94a3b8",
    chip_background: "rgba(15, 23, 42, 0.4)",
    progress_track: "#0f172a",
    accent: "#6366f1",
    accent_secondary: "#0ea5e9",
    accent_tertiary: "#10b981",
    live_dot: "#34d399",
    cursor_glow: "radial-gradient(circle, rgba(99, 102, 241, 0.26) 0%, rgba(15, 23, 42, 0) 60%)",
    orb_wire: "#6366f1",
};

const LIGHT_PALETTE: Palette = Palette {
    page_background: "#f8fafc",
    surface: "rgba(255, 255, 255, 0.8)",
    surface_border: "rgba(203, 213, 225, 0.7)",
    header_scrolled: "rgba(248, 250, 252, 0.8)",
    text: "#334155",
    text_strong: "#0f172a",
    text_muted: "#64748b",
    chip_background: "rgba(241, 245, 249, 0.9)",
    progress_track: "#e2e8f0",
    accent: "#4f46e5",
    accent_secondary: "#0284c7",
    accent_tertiary: "#059669",
    live_dot: "#10b981",
    cursor_glow: "radial-gradient(circle, rgba(99, 102, 241, 0.14) 0%, rgba(248, 250, 252, 0) 60%)",
    orb_wire: "#4f46e5",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeUp {
    pub offset_y: f64,
    pub duration_seconds: f64,
    /// Visible fraction that triggers the reveal.
    pub threshold: f64,
}

/// Motion parameters for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPreset {
    pub magnetic_spring: SpringConfig,
    pub cursor_spring: SpringConfig,
    pub card_hover_spring: SpringConfig,
    pub card_lift_px: f64,
    pub magnetic_strength: f64,
    pub fade_up: FadeUp,
    pub stagger_seconds: f64,
    pub glow_scale_max: f64,
}

const DARK_MOTION: MotionPreset = MotionPreset {
    magnetic_spring: SpringConfig::new(200.0, 20.0),
    cursor_spring: SpringConfig::new(120.0, 15.0),
    card_hover_spring: SpringConfig::new(160.0, 20.0),
    card_lift_px: 4.0,
    magnetic_strength: 0.28,
    fade_up: FadeUp {
        offset_y: 28.0,
        duration_seconds: 0.6,
        threshold: 0.25,
    },
    stagger_seconds: 0.08,
    glow_scale_max: 1.1,
};

const LIGHT_MOTION: MotionPreset = MotionPreset {
    magnetic_spring: SpringConfig::new(180.0, 22.0),
    cursor_spring: SpringConfig::new(100.0, 18.0),
    card_hover_spring: SpringConfig::new(160.0, 22.0),
    card_lift_px: 3.0,
    magnetic_strength: 0.2,
    fade_up: FadeUp {
        offset_y: 20.0,
        duration_seconds: 0.5,
        threshold: 0.25,
    },
    stagger_seconds: 0.06,
    glow_scale_max: 1.05,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePreset {
    pub theme: Theme,
    pub palette: Palette,
    pub motion: MotionPreset,
}

impl ThemePreset {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                theme,
                palette: DARK_PALETTE,
                motion: DARK_MOTION,
            },
            Theme::Light => Self {
                theme,
                palette: LIGHT_PALETTE,
                motion: LIGHT_MOTION,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>().unwrap_err().to_string(),
            "unknown theme 'sepia' (expected 'light' or 'dark')"
        );
    }

    #[test]
    fn toggles_and_displays() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::default().to_string(), "dark");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
        assert_eq!(serde_json::from_str::<Theme>(r#""dark""#).unwrap(), Theme::Dark);
    }

    #[test]
    fn dark_preset_keeps_page_motion() {
        let preset = ThemePreset::for_theme(Theme::Dark);
        assert_eq!(preset.motion.magnetic_spring, SpringConfig::new(200.0, 20.0));
        assert_eq!(preset.motion.cursor_spring, SpringConfig::new(120.0, 15.0));
        assert_eq!(preset.motion.fade_up.offset_y, 28.0);
        assert_eq!(preset.palette.accent, "#6366f1");
    }

    #[test]
    fn presets_differ_only_in_values() {
        let dark = ThemePreset::for_theme(Theme::Dark);
        let light = ThemePreset::for_theme(Theme::Light);
        assert_ne!(dark.palette, light.palette);
        assert_eq!(dark.motion.fade_up.threshold, light.motion.fade_up.threshold);
        assert!(light.motion.glow_scale_max >= 1.0);
    }

    #[test]
    fn gradient_lists_all_accents() {
        let gradient = ThemePreset::for_theme(Theme::Dark).palette.accent_gradient();
        assert_eq!(gradient, "linear-gradient(to right, #6366f1, #0ea5e9, #10b981)");
    }
}
