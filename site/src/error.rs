//! Error types for loading site configuration.
//!
//! Rendering never fails; only reading and validating `site.toml` does.
//!
//! Developed by The Site Authors (c)2026

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The config file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A design token was given a value that cannot be emitted as a CSS custom property
    #[error("invalid value {value:?} for design token `{token}`")]
    InvalidToken {
        /// Token name, e.g. `background`
        token: &'static str,
        /// Offending value
        value: String,
    },

    /// A link points at a script-bearing URL scheme
    #[error("refusing unsafe link target {0:?}")]
    UnsafeHref(String),

    /// `[page] title` was set to an empty string
    #[error("page title must not be empty")]
    EmptyTitle,
}
