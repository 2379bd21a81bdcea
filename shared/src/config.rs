// ===== CONFIG TYPES =====

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported site config version '{found}' (current is {current})", current = AppSection::CURRENT_VERSION)]
    UnsupportedVersion { found: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub app: AppSection,
    pub ui: UiSection,
    pub github: GithubSection,
    pub resume: ResumeSection,
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        if !config.app.is_supported_version() {
            return Err(ConfigError::UnsupportedVersion {
                found: config.app.version,
            });
        }
        Ok(config)
    }
}

// Versioning metadata, so the file format can change without breaking old files
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UiSection {
    pub theme: Theme,
    pub cursor_glow: bool,
    pub show_orb: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            cursor_glow: true,
            show_orb: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GithubSection {
    pub username: String,
}

impl Default for GithubSection {
    fn default() -> Self {
        Self {
            username: "panakantinandu".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ResumeSection {
    pub path: String,
}

impl Default for ResumeSection {
    fn default() -> Self {
        Self {
            path: "/_api/public/Nandu_Resume.pdf".to_string(),
        }
    }
}
