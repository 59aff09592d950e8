//! # site-leptos
//!
//! Leptos home page: a Hero banner followed by a Footer inside a full-height
//! root container styled by the `background` and `foreground` design tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use site_leptos::{render_page, SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`theme`] - design tokens and the palettes resolving them
//! - [`content`] - copy for the sections, provided as Leptos context
//! - [`sections`] - the `Hero` and `Footer` components
//! - [`pages`] - `HomePage`, the composition root
//! - [`document`] - HTML shell (SSR) and `App` (CSR)
//! - [`config`] - `site.toml` loading
//! - [`styles`] - CSS constants
//!
//! Server-side rendering goes through Leptos 0.8's `RenderHtml` trait. The
//! output is static HTML; no hydration is needed.
//!
//! ---
//!
//! Developed by The Site Authors (c)2026

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod pages;
pub mod sections;
pub mod styles;
pub mod theme;

pub use config::{PageMeta, SiteConfig};
pub use content::SiteContent;
pub use document::{App, SiteDocument};
pub use error::ConfigError;
pub use pages::HomePage;
pub use theme::{Palette, Theme, Token};

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete HTML document for the home route.
///
/// Returns the document as a `String`, including `<!DOCTYPE html>`.
///
/// ```rust
/// use site_leptos::{render_page, SiteConfig};
///
/// let mut config = SiteConfig::default();
/// config.page.title = "Acme".into();
/// let html = render_page(&config);
/// assert!(html.contains("<title>Acme</title>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    let config = config.clone();
    let html = Owner::new().with(|| view! { <SiteDocument config=config /> }.to_html());

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the home page composition root, without the document shell.
#[cfg(feature = "ssr")]
pub fn render_home(content: &SiteContent) -> String {
    let content = content.clone();
    Owner::new().with(|| {
        provide_context(content);
        view! { <HomePage /> }.to_html()
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{FooterContent, HeroContent, Link};
    use pretty_assertions::assert_eq;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing from {html}"))
    }

    #[test]
    fn home_has_one_container_hero_and_footer() {
        let html = render_home(&SiteContent::default());

        assert_eq!(html.matches(r#"class="page-root""#).count(), 1);
        assert_eq!(html.matches("<main").count(), 1);
        assert_eq!(html.matches(r#"class="hero""#).count(), 1);
        assert_eq!(html.matches(r#"class="footer""#).count(), 1);
    }

    #[test]
    fn hero_precedes_footer_inside_container() {
        let html = render_home(&SiteContent::default());

        let main_open = position(&html, "<main");
        let hero = position(&html, r#"class="hero""#);
        let footer = position(&html, r#"class="footer""#);
        let main_close = position(&html, "</main>");

        assert!(main_open < hero);
        assert!(hero < footer);
        assert!(footer < main_close);
    }

    #[test]
    fn container_styled_by_tokens() {
        let html = render_home(&SiteContent::default());

        assert!(html.contains("min-height: 100vh"));
        assert!(html.contains("background-color: var(--background)"));
        assert!(html.contains("color: var(--foreground)"));

        let root = &html[position(&html, "<main")..position(&html, r#"class="hero""#)];
        assert!(!root.contains('#'), "literal color in root container: {root}");
    }

    #[test]
    fn rendering_is_idempotent() {
        let content = SiteContent::default();
        assert_eq!(render_home(&content), render_home(&content));

        let config = SiteConfig::default();
        assert_eq!(render_page(&config), render_page(&config));
    }

    #[test]
    fn sections_render_provided_content() {
        let content = SiteContent {
            hero: HeroContent {
                badge: Some("v1.0 is out".into()),
                headline: "Ship faster".into(),
                tagline: "Tools for small teams".into(),
                ..Default::default()
            },
            footer: FooterContent {
                brand: "Acme".into(),
                links: vec![Link {
                    label: "GitHub".into(),
                    href: "https://github.com/acme".into(),
                    external: true,
                }],
                copyright: Some("(c) Acme".into()),
            },
        };
        let html = render_home(&content);

        assert!(html.contains("v1.0 is out"));
        assert!(html.contains("Ship faster"));
        assert!(html.contains("Tools for small teams"));
        assert!(html.contains("https://github.com/acme"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("(c) Acme"));
        assert!(position(&html, "Ship faster") < position(&html, "(c) Acme"));
    }

    #[test]
    fn section_text_is_escaped() {
        let content = SiteContent {
            hero: HeroContent {
                headline: "<script>alert(1)</script>".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_home(&content);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn renders_full_document() {
        let mut config = SiteConfig::default();
        config.page.title = "Acme".into();
        config.page.lang = "pl".into();
        config.page.description = Some("Acme home".into());
        config.content.hero.headline = "Hello from config".into();

        let html = render_page(&config);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"lang="pl""#));
        assert!(html.contains("<title>Acme</title>"));
        assert!(html.contains("Acme home"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("--background: #ffffff;"));
        assert!(html.contains("Hello from config"));
        assert!(position(&html, "</head>") < position(&html, "<main"));
        assert_eq!(html.matches(r#"class="hero""#).count(), 1);
        assert_eq!(html.matches(r#"class="footer""#).count(), 1);
    }

    #[test]
    fn document_without_description_omits_meta() {
        let html = render_page(&SiteConfig::default());
        assert!(!html.contains(r#"name="description""#));
    }
}
