use serde::{Deserialize, Serialize};

pub mod config;
pub mod content;
pub mod geometry;
pub mod interaction;
pub mod theme;

pub use config::{AppSection, ConfigError, GithubSection, ResumeSection, SiteConfig, UiSection};
pub use content::{AboutCard, BlogPost, PROFILE, Profile, Project, ProjectLinks, SECTIONS, SectionId, SkillGroup};
pub use theme::{FadeUp, MotionPreset, Palette, Theme, ThemePreset, UnknownTheme};

// ===== MESSAGE TYPES =====

// The page is static: the frontend never talks to the backend after load.
// Moon still needs concrete message types, so both are uninhabited.

#[derive(Serialize, Deserialize, Debug)]
pub enum UpMsg {}

#[derive(Serialize, Deserialize, Debug)]
pub enum DownMsg {}
