// Footer section
// Developed by The Site Authors (c)2026

use leptos::prelude::*;

use crate::content::SiteContent;

/// Page footer: brand, links and copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_context::<SiteContent>().unwrap_or_default().footer;
    let links = footer
        .links
        .into_iter()
        .map(|link| {
            let (target, rel) = (link.target(), link.rel());
            view! {
                <a href=link.href class="footer-link" target=target rel=rel>
                    {link.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="container">
                <span class="footer-title">{footer.brand}</span>
                <nav class="footer-links">{links}</nav>
                {footer.copyright.map(|text| view! { <p class="footer-copyright">{text}</p> })}
            </div>
        </footer>
    }
}
