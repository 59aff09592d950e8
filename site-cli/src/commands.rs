//! Subcommand implementations.
//!
//! Developed by The Site Authors (c)2026

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use site_leptos::{SiteConfig, Token, render_home, render_page};
use tracing::{debug, info};

use crate::cli::{Command, TokenFormat};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Build { config, out } => build(config.as_deref(), &out).map(|_| ()),
        Command::Render { config, fragment } => {
            let config = load_config(config.as_deref())?;
            let html = if fragment {
                render_home(&config.content)
            } else {
                render_page(&config)
            };
            println!("{html}");
            Ok(())
        }
        Command::Tokens { config, format } => {
            let config = load_config(config.as_deref())?;
            println!("{}", format_tokens(&config, format)?);
            Ok(())
        }
    }
}

/// Explicit path must exist; otherwise fall back to `./site.toml` or defaults.
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            SiteConfig::load(&cwd).with_context(|| {
                format!("loading {}", cwd.join(SiteConfig::FILE_NAME).display())
            })
        }
    }
}

fn build(config: Option<&Path>, out: &Path) -> Result<PathBuf> {
    let config = load_config(config)?;
    debug!("rendering page {:?}", config.page.title);
    let html = render_page(&config);

    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;
    let target = out.join("index.html");
    std::fs::write(&target, &html).with_context(|| format!("writing {}", target.display()))?;

    info!("wrote {} ({} bytes)", target.display(), html.len());
    Ok(target)
}

fn format_tokens(config: &SiteConfig, format: TokenFormat) -> Result<String> {
    match format {
        TokenFormat::Css => Ok(config.theme.stylesheet()),
        TokenFormat::Json => {
            let palette = |p: &site_leptos::Palette| {
                Token::ALL
                    .iter()
                    .map(|t| (t.name().to_string(), serde_json::Value::from(p.value(*t))))
                    .collect::<serde_json::Map<_, _>>()
            };
            let mut json = serde_json::Map::new();
            json.insert("light".into(), palette(&config.theme.light).into());
            if let Some(dark) = &config.theme.dark {
                json.insert("dark".into(), palette(dark).into());
            }
            serde_json::to_string_pretty(&json).context("serializing tokens")
        }
    }
}
