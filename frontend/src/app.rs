//! PortfolioApp - root state of the page

use zoon::*;

use crate::config::{initial_theme, load_site_config};
use crate::dataflow::Atom;
use crate::views::page;
use shared::{SiteConfig, Theme};

/// Self-contained portfolio application
#[derive(Clone)]
pub struct PortfolioApp {
    /// Bundled `site.toml`, read once at startup
    pub config: SiteConfig,

    /// Active theme; the header toggle flips it
    pub theme: Atom<Theme>,
}

impl PortfolioApp {
    pub fn new() -> Self {
        let config = load_site_config();
        let theme = Atom::new(initial_theme(&config));
        zoon::println!("Portfolio starting (config v{}, theme {})", config.app.version, theme.get_cloned());
        Self { config, theme }
    }

    /// Root element. The page is rebuilt for each theme so every effect picks
    /// up that theme's motion preset.
    pub fn root(&self) -> impl Element + use<> {
        let app = self.clone();
        El::new()
            .s(Width::fill())
            .child_signal(self.theme.signal().map(move |theme| {
                zoon::println!("Rendering page with {theme} theme");
                page(&app, theme)
            }))
    }
}
