//! Design tokens and the theme that resolves them.
//!
//! Components only ever reference tokens through [`Token::var`]. Concrete
//! colors live in a [`Theme`], which is emitted once as CSS custom properties.
//!
//! Developed by The Site Authors (c)2026

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named, indirect style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Page background color
    Background,
    /// Default text color
    Foreground,
}

impl Token {
    /// Every token, in declaration order.
    pub const ALL: [Token; 2] = [Token::Background, Token::Foreground];

    /// Token name as used in configuration (`background`).
    pub fn name(self) -> &'static str {
        match self {
            Token::Background => "background",
            Token::Foreground => "foreground",
        }
    }

    /// CSS custom property carrying the token (`--background`).
    pub fn custom_property(self) -> &'static str {
        match self {
            Token::Background => "--background",
            Token::Foreground => "--foreground",
        }
    }

    /// CSS reference to the token (`var(--background)`).
    pub fn var(self) -> &'static str {
        match self {
            Token::Background => "var(--background)",
            Token::Foreground => "var(--foreground)",
        }
    }
}

/// Concrete values for every token in one color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Value for [`Token::Background`]
    pub background: String,
    /// Value for [`Token::Foreground`]
    pub foreground: String,
}

impl Palette {
    /// Default light scheme.
    pub fn light() -> Self {
        Self {
            background: "#ffffff".into(),
            foreground: "#171717".into(),
        }
    }

    /// Default dark scheme.
    pub fn dark() -> Self {
        Self {
            background: "#0a0a0a".into(),
            foreground: "#ededed".into(),
        }
    }

    /// Resolve a token to its value in this palette.
    pub fn value(&self, token: Token) -> &str {
        match token {
            Token::Background => &self.background,
            Token::Foreground => &self.foreground,
        }
    }

    fn declarations(&self, indent: &str) -> String {
        Token::ALL
            .iter()
            .map(|token| {
                format!(
                    "{indent}{}: {};\n",
                    token.custom_property(),
                    self.value(*token)
                )
            })
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for token in Token::ALL {
            let value = self.value(token);
            let forbidden = |c: char| matches!(c, ';' | '{' | '}' | '<' | '>' | '\n' | '\r');
            if value.trim().is_empty() || value.contains(forbidden) {
                return Err(ConfigError::InvalidToken {
                    token: token.name(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A `[theme.light]` / `[theme.dark]` table where every token is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaletteOverride {
    background: Option<String>,
    foreground: Option<String>,
}

impl PaletteOverride {
    /// Missing tokens keep the value of the scheme being overridden.
    fn over(self, base: Palette) -> Palette {
        Palette {
            background: self.background.unwrap_or(base.background),
            foreground: self.foreground.unwrap_or(base.foreground),
        }
    }
}

/// On-disk shape of `[theme]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    light: PaletteOverride,
    dark: PaletteOverride,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        Self {
            light: file.light.over(Palette::light()),
            dark: Some(file.dark.over(Palette::dark())),
        }
    }
}

/// Light palette plus an optional dark override applied via `prefers-color-scheme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeFile")]
pub struct Theme {
    /// Palette applied unconditionally
    pub light: Palette,
    /// Palette applied when the user agent prefers a dark scheme
    pub dark: Option<Palette>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Some(Palette::dark()),
        }
    }
}

impl Theme {
    /// CSS defining every token as a custom property on `:root`.
    pub fn stylesheet(&self) -> String {
        let mut css = format!(":root {{\n{}}}\n", self.light.declarations("    "));
        if let Some(dark) = &self.dark {
            css.push_str(&format!(
                "\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}    }}\n}}\n",
                dark.declarations("        ")
            ));
        }
        css
    }

    /// Reject values that would break out of a CSS declaration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.light.validate()?;
        if let Some(dark) = &self.dark {
            dark.validate()?;
        }
        Ok(())
    }
}
