//! Site configuration baked into the bundle.

use shared::{SiteConfig, Theme};

use crate::platform::query_param;

const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the bundled `site.toml`. A broken file must not take the page down,
/// so errors are logged and the defaults are used instead.
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(error) => {
            zoon::eprintln!("Invalid site.toml, falling back to defaults: {error}");
            SiteConfig::default()
        }
    }
}

/// Theme to start with: `?theme=light|dark` wins over the configured one.
pub fn initial_theme(config: &SiteConfig) -> Theme {
    query_param("theme")
        .and_then(|value| theme_override(&value, config.ui.theme))
        .unwrap_or(config.ui.theme)
}

fn theme_override(value: &str, configured: Theme) -> Option<Theme> {
    match value.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(error) => {
            zoon::eprintln!("Ignoring ?theme override: {error} (keeping '{configured}')");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::from_toml_str(SITE_TOML).expect("bundled site.toml must be valid");
        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(config.ui.cursor_glow);
        assert!(!config.github.username.is_empty());
        assert!(config.resume.path.ends_with(".pdf"));
    }

    #[test]
    fn query_selects_theme() {
        assert_eq!(theme_override("light", Theme::Dark), Some(Theme::Light));
        assert_eq!(theme_override("dark", Theme::Light), Some(Theme::Dark));
        assert_eq!(theme_override("neon", Theme::Dark), None);
    }
}
