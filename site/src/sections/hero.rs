// Hero section
// Developed by The Site Authors (c)2026

use leptos::prelude::*;

use crate::content::{Link, SiteContent};

/// Hero banner: optional badge, headline, tagline and call-to-action buttons.
#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_context::<SiteContent>().unwrap_or_default().hero;
    let actions = hero
        .actions
        .into_iter()
        .map(|action| {
            let class = action.class();
            let (target, rel) = (action.link.target(), action.link.rel());
            let Link { label, href, .. } = action.link;
            view! {
                <a href=href class=class target=target rel=rel>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    {hero.badge.map(|badge| view! { <div class="hero-badge">{badge}</div> })}
                    <h1 class="hero-title">{hero.headline}</h1>
                    <p class="hero-description">{hero.tagline}</p>
                    <div class="hero-actions">{actions}</div>
                </div>
            </div>
        </section>
    }
}
