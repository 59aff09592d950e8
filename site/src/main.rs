// Home page - browser build (trunk, `--no-default-features --features csr`)
// Developed by The Site Authors (c)2026

use leptos::prelude::*;
use site_leptos::{App, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::from_toml_str(include_str!("../site.toml")) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("site.toml: {e}; falling back to defaults");
            SiteConfig::default()
        }
    };

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
