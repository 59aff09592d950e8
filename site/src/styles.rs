//! CSS for the home page.
//!
//! Colors are only ever taken from the design tokens, so swapping the
//! [`crate::Theme`] restyles the whole page. The token values themselves come
//! from [`crate::Theme::stylesheet`] and are emitted ahead of this sheet.
//!
//! Developed by The Site Authors (c)2026

/// Layout and typography for the root container, Hero and Footer.
pub const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

.container {
    width: 100%;
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.page-root {
    display: flex;
    flex-direction: column;
}

.hero {
    flex: 1;
    display: flex;
    align-items: center;
    padding: 8rem 0 6rem;
}

.hero-badge {
    display: inline-block;
    margin-bottom: 1.5rem;
    padding: 0.25rem 0.75rem;
    border: 1px solid currentColor;
    border-radius: 999px;
    font-size: 0.8rem;
    opacity: 0.7;
}

.hero-title {
    margin: 0 0 1.5rem;
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.02em;
}

.hero-description {
    max-width: 40rem;
    margin: 0 0 2.5rem;
    font-size: 1.25rem;
    opacity: 0.75;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.btn {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 999px;
    font-weight: 600;
    text-decoration: none;
    transition: opacity 0.15s ease;
}

.btn:hover {
    opacity: 0.85;
}

.btn-primary {
    background: var(--foreground);
    color: var(--background);
}

.btn-secondary {
    border: 1px solid var(--foreground);
    color: var(--foreground);
}

.footer {
    padding: 2.5rem 0;
    border-top: 1px solid color-mix(in srgb, var(--foreground) 12%, transparent);
    font-size: 0.875rem;
}

.footer .container {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.footer-title {
    font-weight: 600;
}

.footer-links {
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
}

.footer-link {
    color: inherit;
    opacity: 0.7;
    text-decoration: none;
}

.footer-link:hover {
    opacity: 1;
    text-decoration: underline;
}

.footer-copyright {
    margin: 0;
    opacity: 0.5;
}
"#;

/// Content-Security-Policy for the static document: inline styles, no scripts.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; base-uri 'none'; form-action 'none'";
