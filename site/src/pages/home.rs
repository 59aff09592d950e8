// Home page - Hero followed by Footer in a full-height, token-styled container
// Developed by The Site Authors (c)2026
use crate::sections::{Footer, Hero};
use crate::theme::Token;
use leptos::prelude::*;

/// Class carried by the root container.
pub const ROOT_CLASS: &str = "page-root";

/// Inline style of the root container. References tokens only.
pub fn root_style() -> String {
    format!(
        "min-height: 100vh; background-color: {}; color: {};",
        Token::Background.var(),
        Token::Foreground.var()
    )
}

/// Composition root for the home route. Takes no props.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class=ROOT_CLASS style=root_style()>
            <Hero />
            <Footer />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_style_references_tokens_only() {
        let style = root_style();
        assert_eq!(
            style,
            "min-height: 100vh; background-color: var(--background); color: var(--foreground);"
        );
        assert!(!style.contains('#'));
        assert!(!style.contains("rgb"));
    }
}
