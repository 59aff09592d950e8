//! Configuration file support.
//!
//! Loads an optional `site.toml` holding page metadata, the theme palettes and
//! the section copy.
//!
//! Developed by The Site Authors (c)2026

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::SiteContent;
use crate::error::ConfigError;
use crate::theme::Theme;

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// `<title>` text
    pub title: String,
    /// `<html lang>` value
    pub lang: String,
    /// `<meta name="description">` value
    pub description: Option<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Home".into(),
            lang: "en".into(),
            description: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `[page]` table
    pub page: PageMeta,
    /// `[theme.light]` and `[theme.dark]` tables
    pub theme: Theme,
    /// `[hero]` and `[footer]` tables
    #[serde(flatten)]
    pub content: SiteContent,
}

impl SiteConfig {
    /// Conventional config file name.
    pub const FILE_NAME: &'static str = "site.toml";

    /// Load `site.toml` from the given directory.
    /// Returns the default config if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(Self::FILE_NAME);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", Self::FILE_NAME, root.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load config from a specific path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        self.theme.validate()?;
        self.content.validate()
    }
}
