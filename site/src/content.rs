//! Copy rendered by the Hero and Footer sections.
//!
//! Sections read this from Leptos context, so the home page itself takes no
//! props. When nothing is provided they fall back to [`SiteContent::default`].
//!
//! Developed by The Site Authors (c)2026

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// URL schemes that execute or inline content when followed.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// A hyperlink shown in the Hero or Footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible text
    pub label: String,
    /// Target URL or fragment
    pub href: String,
    /// Open in a new tab
    #[serde(default)]
    pub external: bool,
}

impl Link {
    /// `target` attribute value, set only for external links.
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    /// `rel` attribute value, set only for external links.
    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }

    /// Reject script-bearing URLs. Browsers ignore ASCII whitespace and
    /// control characters inside the scheme, so those are stripped first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme: String = self
            .href
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
            .take_while(|c| *c != ':')
            .chain(std::iter::once(':'))
            .collect::<String>()
            .to_ascii_lowercase();
        if BLOCKED_SCHEMES.contains(&scheme.as_str()) {
            return Err(ConfigError::UnsafeHref(self.href.clone()));
        }
        Ok(())
    }
}

/// Call-to-action button in the Hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroAction {
    /// Where the button points
    #[serde(flatten)]
    pub link: Link,
    /// Primary buttons get the filled style
    #[serde(default)]
    pub primary: bool,
}

impl HeroAction {
    /// CSS class list for the button.
    pub fn class(&self) -> &'static str {
        if self.primary {
            "btn btn-primary"
        } else {
            "btn btn-secondary"
        }
    }
}

/// Hero banner copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Small pill above the headline
    pub badge: Option<String>,
    /// Main `<h1>` text
    pub headline: String,
    /// Paragraph under the headline
    pub tagline: String,
    /// Buttons, in display order
    pub actions: Vec<HeroAction>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            badge: None,
            headline: "Welcome".into(),
            tagline: "Start building your next idea.".into(),
            actions: vec![HeroAction {
                link: Link {
                    label: "Get Started".into(),
                    href: "#get-started".into(),
                    external: false,
                },
                primary: true,
            }],
        }
    }
}

/// Footer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    /// Name shown at the start of the footer
    pub brand: String,
    /// Links, in display order
    pub links: Vec<Link>,
    /// Omitted when unset
    pub copyright: Option<String>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand: "Home".into(),
            links: Vec::new(),
            copyright: None,
        }
    }
}

/// Everything the sections need, provided as Leptos context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// `[hero]` table
    pub hero: HeroContent,
    /// `[footer]` table
    pub footer: FooterContent,
}

impl SiteContent {
    /// Check every link in both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hero
            .actions
            .iter()
            .map(|action| &action.link)
            .chain(&self.footer.links)
            .try_for_each(Link::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links_open_in_new_tab() {
        let link = Link {
            label: "GitHub".into(),
            href: "https://github.com".into(),
            external: true,
        };
        assert_eq!(link.target(), Some("_blank"));
        assert_eq!(link.rel(), Some("noopener noreferrer"));

        let local = Link {
            external: false,
            ..link
        };
        assert_eq!(local.target(), None);
        assert_eq!(local.rel(), None);
    }

    fn link(href: &str) -> Link {
        Link {
            label: "x".into(),
            href: href.into(),
            external: false,
        }
    }

    #[test]
    fn script_urls_rejected() {
        for href in [
            "javascript:alert(1)",
            "JavaScript:alert(1)",
            " java\tscript:alert(1)",
            "vbscript:msgbox",
            "data:text/html,<script>alert(1)</script>",
        ] {
            assert!(
                matches!(link(href).validate(), Err(ConfigError::UnsafeHref(_))),
                "{href:?} accepted"
            );
        }
    }

    #[test]
    fn ordinary_urls_accepted() {
        for href in ["https://example.com", "/blog", "#get-started", "mailto:hi@example.com", "notes"] {
            assert!(link(href).validate().is_ok(), "{href:?} rejected");
        }
    }

    #[test]
    fn content_validation_covers_footer_links() {
        let mut content = SiteContent::default();
        assert!(content.validate().is_ok());
        content.footer.links.push(link("javascript:void(0)"));
        assert!(content.validate().is_err());
    }

    #[test]
    fn primary_action_class() {
        let mut action = HeroContent::default().actions.remove(0);
        assert_eq!(action.class(), "btn btn-primary");
        action.primary = false;
        assert_eq!(action.class(), "btn btn-secondary");
    }
}
