//! Root document component - the complete HTML page around [`HomePage`].
//!
//! Developed by The Site Authors (c)2026

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::pages::HomePage;
use crate::styles::{BASE_CSS, CSP};
use crate::theme::Theme;

/// Token definitions followed by the base layout sheet.
pub fn site_stylesheet(theme: &Theme) -> String {
    format!("{}{}", theme.stylesheet(), BASE_CSS)
}

/// The complete HTML document for the site
#[component]
pub fn SiteDocument(
    /// Page metadata, theme and section copy
    config: SiteConfig,
) -> impl IntoView {
    provide_context(config.content);
    let stylesheet = site_stylesheet(&config.theme);
    let description = config.page.description;

    view! {
        <html lang=config.page.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                {description.map(|text| view! { <meta name="description" content=text /> })}
                <title>{config.page.title}</title>
                <style>{stylesheet}</style>
            </head>
            <body>
                <HomePage />
            </body>
        </html>
    }
}

/// Browser entry point: token sheet plus the home page, mounted under `<body>`.
#[component]
pub fn App(
    /// Theme and section copy; page metadata is left to `index.html`
    config: SiteConfig,
) -> impl IntoView {
    provide_context(config.content);
    let stylesheet = site_stylesheet(&config.theme);

    view! {
        <style>{stylesheet}</style>
        <HomePage />
    }
}
